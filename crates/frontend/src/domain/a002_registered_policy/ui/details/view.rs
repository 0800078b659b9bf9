use contracts::domain::a002_registered_policy::aggregate::RegisteredPolicy;
use contracts::enums::crop_type::CropType;
use contracts::system::auth::PartnerRole;
use leptos::prelude::*;

use super::view_model::RegisteredPolicyDetailsViewModel;
use crate::domain::a002_registered_policy::ui::list::status_variant;
use crate::shared::components::table::{format_number_with_decimals, format_vnd};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_datetime, format_opt_datetime, format_period};
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn RegisteredPolicyDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let vm = RegisteredPolicyDetailsViewModel::new(id);

    view! {
        <div class="details-container registered-policy-details">
            <div class="details-header">
                <h3>
                    {move || vm.policy().map(|p| format!("Hợp đồng {}", p.policy_number)).unwrap_or_else(|| "Hợp đồng".to_string())}
                </h3>
                {move || vm.policy().map(|p| view! {
                    <UiBadge variant=status_variant(p.status).to_string()>{p.status.display_name()}</UiBadge>
                })}
            </div>

            {move || vm.is_loading().then(|| view! { <div class="loading">"Đang tải..."</div> })}
            {move || vm.load_error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

            {move || vm.policy().map(|p| view! { <PolicySummary policy=p /> })}

            <Show when=move || vm.is_reviewable()>
                <RequireRole allow=PartnerRole::can_review>
                    <div class="details-form review-panel">
                        <h4>"Thẩm định"</h4>
                        <div class="form-group">
                            <label for="approve_note">"Ghi chú khi duyệt (không bắt buộc)"</label>
                            <textarea
                                id="approve_note"
                                rows="2"
                                prop:value=move || vm.approve_note.get()
                                on:input=move |ev| vm.approve_note.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="reject_reason">"Lý do từ chối"</label>
                            <textarea
                                id="reject_reason"
                                rows="2"
                                prop:value=move || vm.reject_reason.get()
                                on:input=move |ev| vm.reject_reason.set(event_target_value(&ev))
                                placeholder="Ít nhất 10 ký tự"
                            />
                        </div>
                        <div class="details-actions">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| vm.approve_command()
                                disabled=move || vm.is_submitting.get()
                            >
                                {icon("check")}
                                " Duyệt"
                            </button>
                            <button
                                class="btn btn-danger"
                                on:click=move |_| vm.reject_command()
                                disabled=move || vm.is_submitting.get()
                            >
                                {icon("x")}
                                " Từ chối"
                            </button>
                        </div>
                    </div>
                </RequireRole>
            </Show>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| vm.reload()>
                    {icon("refresh")}
                    " Làm mới"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    " Đóng"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PolicySummary(policy: RegisteredPolicy) -> impl IntoView {
    let rows = vec![
        ("Sản phẩm", policy.product_name.clone()),
        ("Nông dân", policy.farmer_name.clone()),
        ("Trang trại", policy.farm_name.clone()),
        ("Tỉnh", policy.province.clone()),
        ("Cây trồng", CropType::label_for(&policy.crop_type).to_string()),
        ("Diện tích", format!("{} ha", format_number_with_decimals(policy.area_ha, 2))),
        ("Số tiền bảo hiểm", format_vnd(policy.sum_insured)),
        ("Phí bảo hiểm", format_vnd(policy.premium_amount)),
        ("Thời hạn", format_period(policy.coverage_start, policy.coverage_end)),
        ("Ngày nộp", format_datetime(&policy.submitted_at)),
        ("Ngày thẩm định", format_opt_datetime(policy.reviewed_at)),
        ("Ghi chú thẩm định", policy.review_note.clone().unwrap_or_else(|| "—".to_string())),
    ];

    view! {
        <dl class="details-grid">
            {rows.into_iter().map(|(label, value)| view! {
                <dt>{label}</dt>
                <dd>{value}</dd>
            }).collect_view()}
        </dl>
    }
}
