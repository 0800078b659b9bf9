use contracts::domain::a005_beneficiary::aggregate::Beneficiary;
use contracts::enums::crop_type::CropType;
use leptos::prelude::*;

use super::view_model::{optional, BeneficiaryDetailsViewModel};
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::table::parse_number;
use crate::shared::icons::icon;

#[component]
pub fn BeneficiaryDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_tabs();
    let vm = BeneficiaryDetailsViewModel::new(id);

    let on_saved = Callback::new(move |saved: Beneficiary| {
        let key = detail_tab_key("a005_beneficiary", Some(&saved.id));
        let title = detail_tab_label("Nông hộ", Some(&saved.full_name));
        if tabs_store.opened.with_untracked(|tabs| tabs.iter().any(|t| t.key == key)) {
            tabs_store.update_tab_title(&key, &title);
        } else {
            tabs_store.open_tab(&key, &title);
            on_close.run(());
        }
    });

    let error_for = move |field: &'static str| {
        move || vm.field_error(field).map(|msg| view! { <span class="form-error">{msg}</span> })
    };

    view! {
        <div class="details-container beneficiary-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Thông tin nông hộ" } else { "Nông hộ mới" }}</h3>
            </div>

            {move || vm.is_loading().then(|| view! { <div class="loading">"Đang tải..."</div> })}
            {move || vm.load_error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="full_name">"Họ tên"</label>
                    <input
                        type="text"
                        id="full_name"
                        prop:value=move || vm.form.with(|f| f.full_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    {error_for("full_name")}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">"Số điện thoại"</label>
                        <input
                            type="tel"
                            id="phone"
                            maxlength="10"
                            placeholder="0912345678"
                            prop:value=move || vm.form.with(|f| f.phone.clone())
                            on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev).trim().to_string())
                        />
                        {error_for("phone")}
                    </div>
                    <div class="form-group">
                        <label for="national_id">"Số CCCD"</label>
                        <input
                            type="text"
                            id="national_id"
                            maxlength="12"
                            prop:value=move || vm.form.with(|f| f.national_id.clone())
                            on:input=move |ev| vm.form.update(|f| f.national_id = event_target_value(&ev).trim().to_string())
                        />
                        {error_for("national_id")}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="province">"Tỉnh / thành"</label>
                        <input
                            type="text"
                            id="province"
                            prop:value=move || vm.form.with(|f| f.province.clone())
                            on:input=move |ev| vm.form.update(|f| f.province = event_target_value(&ev))
                        />
                        {error_for("province")}
                    </div>
                    <div class="form-group">
                        <label for="district">"Quận / huyện"</label>
                        <input
                            type="text"
                            id="district"
                            prop:value=move || vm.form.with(|f| f.district.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.district = optional(event_target_value(&ev)))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="address">"Địa chỉ"</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || vm.form.with(|f| f.address.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.address = optional(event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="crop_type">"Cây trồng chính"</label>
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
                        {error_for("crop_type")}
                    </div>
                    <div class="form-group">
                        <label for="farm_area_ha">"Diện tích canh tác (ha)"</label>
                        <input
                            type="number"
                            id="farm_area_ha"
                            step="0.01"
                            prop:value=move || vm.form.with(|f| f.farm_area_ha.to_string())
                            on:change=move |ev| vm.form.update(|f| f.farm_area_ha = parse_number(&event_target_value(&ev)))
                        />
                        {error_for("farm_area_ha")}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="bank_name">"Ngân hàng"</label>
                        <input
                            type="text"
                            id="bank_name"
                            prop:value=move || vm.form.with(|f| f.bank_name.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.bank_name = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="bank_account">"Số tài khoản"</label>
                        <input
                            type="text"
                            id="bank_account"
                            prop:value=move || vm.form.with(|f| f.bank_account.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.bank_account = optional(event_target_value(&ev)))
                        />
                        {error_for("bank_account")}
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.is_saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { " Lưu" } else { " Tạo" }}
                </button>
                <Show when=move || vm.is_edit_mode()>
                    <button
                        class="btn btn-danger"
                        on:click=move |_| vm.delete_command(on_close)
                        disabled=move || vm.is_saving.get()
                    >
                        {icon("trash")}
                        {move || if vm.confirm_delete.get() { " Xác nhận xóa?" } else { " Xóa" }}
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
