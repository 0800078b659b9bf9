use contracts::domain::a004_cancellation_request::aggregate::{CancellationRequest, DisputeOutcome};
use contracts::system::auth::PartnerRole;
use leptos::prelude::*;

use super::view_model::CancellationDetailsViewModel;
use crate::domain::a004_cancellation_request::ui::list::{requester_label, status_variant};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::components::table::format_vnd;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn CancellationRequestDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let vm = CancellationDetailsViewModel::new(id);

    view! {
        <div class="details-container cancellation-details">
            <div class="details-header">
                <h3>
                    {move || vm.request().map(|r| format!("Yêu cầu hủy HĐ {}", r.policy_number)).unwrap_or_else(|| "Yêu cầu hủy".to_string())}
                </h3>
                {move || vm.request().map(|r| view! {
                    <UiBadge variant=status_variant(r.status).to_string()>{r.status.display_name()}</UiBadge>
                })}
            </div>

            {move || vm.is_loading().then(|| view! { <div class="loading">"Đang tải..."</div> })}
            {move || vm.load_error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

            {move || vm.request().map(|r| view! { <RequestSummary request=r /> })}

            <Show when=move || vm.can_review()>
                <RequireRole allow=PartnerRole::can_review>
                    <div class="details-form review-panel">
                        <h4>"Xem xét yêu cầu"</h4>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="compensation">"Số tiền hoàn trả (VND)"</label>
                                <input
                                    type="text"
                                    id="compensation"
                                    placeholder="Để trống nếu không hoàn trả"
                                    prop:value=move || vm.compensation.get()
                                    on:input=move |ev| vm.compensation.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="review_note">"Ghi chú"</label>
                                <input
                                    type="text"
                                    id="review_note"
                                    prop:value=move || vm.review_note.get()
                                    on:input=move |ev| vm.review_note.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="deny_reason">"Lý do từ chối"</label>
                            <textarea
                                id="deny_reason"
                                rows="2"
                                placeholder="Ít nhất 10 ký tự"
                                prop:value=move || vm.deny_reason.get()
                                on:input=move |ev| vm.deny_reason.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="details-actions">
                            <button class="btn btn-primary" on:click=move |_| vm.approve_command() disabled=move || vm.is_submitting.get()>
                                {icon("check")}
                                " Chấp thuận"
                            </button>
                            <button class="btn btn-danger" on:click=move |_| vm.deny_command() disabled=move || vm.is_submitting.get()>
                                {icon("x")}
                                " Từ chối"
                            </button>
                        </div>
                    </div>
                </RequireRole>
            </Show>

            <Show when=move || vm.can_resolve()>
                <RequireRole allow=PartnerRole::can_review>
                    <div class="details-form review-panel">
                        <h4>"Giải quyết tranh chấp"</h4>
                        <div class="form-group">
                            <label for="outcome">"Kết quả"</label>
                            <select
                                id="outcome"
                                class="form-select"
                                on:change=move |ev| {
                                    let outcome = match event_target_value(&ev).as_str() {
                                        "reinstate_policy" => DisputeOutcome::ReinstatePolicy,
                                        _ => DisputeOutcome::UpholdCancellation,
                                    };
                                    vm.outcome.set(outcome);
                                }
                            >
                                <option value="uphold_cancellation">{DisputeOutcome::UpholdCancellation.display_name()}</option>
                                <option value="reinstate_policy">{DisputeOutcome::ReinstatePolicy.display_name()}</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="resolve_note">"Ghi chú"</label>
                            <textarea
                                id="resolve_note"
                                rows="2"
                                prop:value=move || vm.resolve_note.get()
                                on:input=move |ev| vm.resolve_note.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="details-actions">
                            <button class="btn btn-primary" on:click=move |_| vm.resolve_command() disabled=move || vm.is_submitting.get()>
                                {icon("check")}
                                " Xác nhận"
                            </button>
                        </div>
                    </div>
                </RequireRole>
            </Show>

            <div class="details-actions">
                <Show when=move || vm.can_revoke()>
                    <button class="btn btn-danger" on:click=move |_| vm.revoke_command() disabled=move || vm.is_submitting.get()>
                        {icon("trash")}
                        " Thu hồi yêu cầu"
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
fn RequestSummary(request: CancellationRequest) -> impl IntoView {
    let dash = || "—".to_string();
    let rows = vec![
        ("Nông dân", request.farmer_name.clone()),
        ("Người yêu cầu", requester_label(request.requester_role).to_string()),
        ("Lý do", request.reason.clone()),
        ("Số tiền hoàn trả", request.compensation_amount.map(format_vnd).unwrap_or_else(dash)),
        ("Ghi chú xem xét", request.review_note.clone().unwrap_or_else(dash)),
        ("Lý do tranh chấp", request.dispute_reason.clone().unwrap_or_else(dash)),
        ("Ngày tạo", format_datetime(&request.created_at)),
        ("Ngày xem xét", format_opt_datetime(request.reviewed_at)),
        ("Thu hồi trước", format_opt_datetime(request.revocable_until)),
    ];

    view! {
        <dl class="details-grid">
            {rows.into_iter().map(|(label, value)| view! {
                <dt>{label}</dt>
                <dd>{value}</dd>
            }).collect_view()}
        </dl>
        {(!request.evidence_urls.is_empty()).then(|| view! { <h4>"Bằng chứng"</h4> })}
        <div class="evidence-gallery">
            {request.evidence_urls.iter().map(|url| view! {
                <a href=url.clone() target="_blank" rel="noopener">
                    <img src=url.clone() alt="Bằng chứng" class="evidence-gallery__item" />
                </a>
            }).collect_view()}
        </div>
    }
}
