use contracts::domain::a001_base_policy::aggregate::{BasePolicy, ThresholdOperator, TriggerCondition};
use contracts::enums::crop_type::CropType;
use leptos::prelude::*;

use super::view_model::BasePolicyDetailsViewModel;
use crate::domain::a001_base_policy::ui::list::status_variant;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::table::parse_number;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;

const OPERATORS: [ThresholdOperator; 4] = [
    ThresholdOperator::Lt,
    ThresholdOperator::Lte,
    ThresholdOperator::Gt,
    ThresholdOperator::Gte,
];

#[component]
pub fn BasePolicyDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_tabs();
    let vm = BasePolicyDetailsViewModel::new(id);

    // A freshly created product moves to its own tab
    let on_saved = Callback::new(move |saved: BasePolicy| {
        let key = detail_tab_key("a001_base_policy", Some(&saved.id));
        let title = detail_tab_label("Sản phẩm", Some(&saved.product_code));
        if tabs_store.opened.with_untracked(|tabs| tabs.iter().any(|t| t.key == key)) {
            tabs_store.update_tab_title(&key, &title);
        } else {
            tabs_store.open_tab(&key, &title);
            on_close.run(());
        }
    });

    let open_placeholders = move |_| {
        let key = "u501_template_placeholders";
        tabs_store.open_tab(key, &tab_label_for_key(key));
    };

    view! {
        <div class="details-container base-policy-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Chỉnh sửa sản phẩm bảo hiểm" } else { "Sản phẩm bảo hiểm mới" }}
                </h3>
                {move || vm.status.get().map(|s| view! {
                    <UiBadge variant=status_variant(s).to_string()>{s.display_name()}</UiBadge>
                })}
            </div>

            {move || vm.is_loading().then(|| view! { <div class="loading">"Đang tải..."</div> })}
            {move || vm.load_error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <fieldset class="details-form" disabled=move || vm.is_read_only()>
                <div class="form-group">
                    <label for="product_code">"Mã sản phẩm"</label>
                    <input
                        type="text"
                        id="product_code"
                        prop:value=move || vm.form.with(|f| f.product_code.clone())
                        on:input=move |ev| vm.form.update(|f| f.product_code = event_target_value(&ev))
                        placeholder="VD: LUA-HE-THU"
                    />
                    <FieldError vm=vm field="product_code" />
                </div>

                <div class="form-group">
                    <label for="product_name">"Tên sản phẩm"</label>
                    <input
                        type="text"
                        id="product_name"
                        prop:value=move || vm.form.with(|f| f.product_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.product_name = event_target_value(&ev))
                    />
                    <FieldError vm=vm field="product_name" />
                </div>

                <div class="form-group">
                    <label for="crop_type">"Cây trồng"</label>
                    <select
                        id="crop_type"
                        class="form-select"
                        prop:value=move || vm.form.with(|f| f.crop_type.clone())
                        on:change=move |ev| vm.form.update(|f| f.crop_type = event_target_value(&ev))
                    >
                        <option value="">"-- Chọn cây trồng --"</option>
                        {CropType::all().into_iter().map(|c| view! {
                            <option value=c.code()>{c.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <FieldError vm=vm field="crop_type" />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="premium_rate">"Tỷ lệ phí (%)"</label>
                        <input
                            type="number"
                            id="premium_rate"
                            step="0.01"
                            prop:value=move || vm.form.with(|f| f.premium_rate.to_string())
                            on:change=move |ev| vm.form.update(|f| f.premium_rate = parse_number(&event_target_value(&ev)))
                        />
                        <FieldError vm=vm field="premium_rate" />
                    </div>

                    <div class="form-group">
                        <label for="coverage_per_ha">"Số tiền bảo hiểm / ha (VND)"</label>
                        <input
                            type="number"
                            id="coverage_per_ha"
                            step="1000"
                            prop:value=move || vm.form.with(|f| f.coverage_per_ha.to_string())
                            on:change=move |ev| vm.form.update(|f| f.coverage_per_ha = parse_number(&event_target_value(&ev)))
                        />
                        <FieldError vm=vm field="coverage_per_ha" />
                    </div>

                    <div class="form-group">
                        <label for="coverage_months">"Thời hạn (tháng)"</label>
                        <input
                            type="number"
                            id="coverage_months"
                            min="1"
                            max="36"
                            prop:value=move || vm.form.with(|f| f.coverage_months.to_string())
                            on:change=move |ev| vm.form.update(|f| {
                                f.coverage_months = event_target_value(&ev).trim().parse().unwrap_or(0)
                            })
                        />
                        <FieldError vm=vm field="coverage_months" />
                    </div>
                </div>

                <div class="form-group">
                    <label for="description">"Mô tả"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.description = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="template_url">"Mẫu hợp đồng (PDF)"</label>
                    <div class="form-inline">
                        <input
                            type="url"
                            id="template_url"
                            prop:value=move || vm.form.with(|f| f.template_url.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.template_url = if value.trim().is_empty() { None } else { Some(value.trim().to_string()) };
                                });
                            }
                            placeholder="https://..."
                        />
                        <button type="button" class="btn btn-secondary" on:click=open_placeholders>
                            {icon("file-text")}
                            " Gán trường mẫu"
                        </button>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Điều kiện kích hoạt chi trả"</label>
                    <table class="details-table">
                        <thead>
                            <tr>
                                <th>"Chỉ số"</th>
                                <th>"Toán tử"</th>
                                <th>"Ngưỡng"</th>
                                <th>"Đơn vị"</th>
                                <th>"Số ngày"</th>
                                <th>"Chi trả (%)"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let count = vm.form.with(|f| f.trigger_conditions.len());
                                (0..count).map(|index| view! { <ConditionRow vm=vm index=index /> }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <FieldError vm=vm field="trigger_conditions" />
                    <button type="button" class="btn btn-secondary" on:click=move |_| vm.add_condition()>
                        {icon("plus")}
                        " Thêm điều kiện"
                    </button>
                </div>
            </fieldset>

            <div class="details-actions">
                <Show when=move || !vm.is_read_only()>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(on_saved)
                        disabled=move || vm.is_saving.get()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Lưu" } else { " Tạo" }}
                    </button>
                </Show>
                <Show when=move || vm.is_edit_mode() && !vm.is_read_only()>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| vm.archive_command()
                        disabled=move || vm.is_saving.get()
                    >
                        {icon("trash")}
                        " Lưu trữ"
                    </button>
                </Show>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    " Đóng"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FieldError(vm: BasePolicyDetailsViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|msg| view! { <span class="form-error">{msg}</span> })
}

#[component]
fn ConditionRow(vm: BasePolicyDetailsViewModel, index: usize) -> impl IntoView {
    let read = move |f: fn(&TriggerCondition) -> String| {
        vm.form.with(|form| form.trigger_conditions.get(index).map(f).unwrap_or_default())
    };

    view! {
        <tr>
            <td>
                <input
                    type="text"
                    placeholder="rainfall"
                    prop:value=move || read(|c| c.parameter.clone())
                    on:input=move |ev| vm.update_condition(index, |c| c.parameter = event_target_value(&ev))
                />
            </td>
            <td>
                <select
                    class="form-select"
                    prop:value=move || read(|c| c.operator.symbol().to_string())
                    on:change=move |ev| {
                        if let Some(op) = ThresholdOperator::from_symbol(&event_target_value(&ev)) {
                            vm.update_condition(index, |c| c.operator = op);
                        }
                    }
                >
                    {OPERATORS.into_iter().map(|op| view! {
                        <option value=op.symbol()>{op.symbol()}</option>
                    }).collect_view()}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    step="0.1"
                    prop:value=move || read(|c| c.threshold.to_string())
                    on:change=move |ev| vm.update_condition(index, |c| c.threshold = parse_number(&event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    type="text"
                    placeholder="mm"
                    prop:value=move || read(|c| c.unit.clone())
                    on:input=move |ev| vm.update_condition(index, |c| c.unit = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    prop:value=move || read(|c| c.window_days.to_string())
                    on:change=move |ev| vm.update_condition(index, |c| {
                        c.window_days = event_target_value(&ev).trim().parse().unwrap_or(0)
                    })
                />
            </td>
            <td>
                <input
                    type="number"
                    step="1"
                    prop:value=move || read(|c| c.payout_percent.to_string())
                    on:change=move |ev| vm.update_condition(index, |c| c.payout_percent = parse_number(&event_target_value(&ev)))
                />
            </td>
            <td>
                <button type="button" class="btn btn-icon" title="Xóa" on:click=move |_| vm.remove_condition(index)>
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}
