use contracts::domain::a003_payout::aggregate::Payout;
use contracts::system::auth::PartnerRole;
use leptos::prelude::*;

use super::view_model::PayoutDetailsViewModel;
use crate::domain::a003_payout::ui::list::status_variant;
use crate::shared::components::table::format_amount;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn PayoutDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let vm = PayoutDetailsViewModel::new(id);

    view! {
        <div class="details-container payout-details">
            <div class="details-header">
                <h3>
                    {move || vm.payout().map(|p| format!("Chi trả cho HĐ {}", p.policy_number)).unwrap_or_else(|| "Chi trả".to_string())}
                </h3>
                {move || vm.payout().map(|p| view! {
                    <UiBadge variant=status_variant(p.status).to_string()>{p.status.display_name()}</UiBadge>
                })}
            </div>

            {move || vm.is_loading().then(|| view! { <div class="loading">"Đang tải..."</div> })}
            {move || vm.load_error().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || vm.payout().map(|p| view! { <PayoutSummary payout=p /> })}

            <RequireRole allow=PartnerRole::can_pay>
                <Show when=move || vm.can_mark_paid()>
                    <div class="details-form">
                        <div class="form-group">
                            <label for="transaction_ref">"Mã giao dịch ngân hàng"</label>
                            <input
                                type="text"
                                id="transaction_ref"
                                prop:value=move || vm.transaction_ref.get()
                                on:input=move |ev| vm.transaction_ref.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </Show>
                <div class="details-actions">
                    <Show when=move || vm.can_approve()>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| vm.approve_command()
                            disabled=move || vm.is_submitting.get()
                        >
                            {icon("check")}
                            " Duyệt chi trả"
                        </button>
                    </Show>
                    <Show when=move || vm.can_mark_paid()>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| vm.mark_paid_command()
                            disabled=move || vm.is_submitting.get()
                        >
                            {icon("wallet")}
                            " Xác nhận đã chi"
                        </button>
                    </Show>
                </div>
            </RequireRole>

            <div class="details-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    " Đóng"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PayoutSummary(payout: Payout) -> impl IntoView {
    let rows = vec![
        ("Số hợp đồng", payout.policy_number.clone()),
        ("Nông dân", payout.farmer_name.clone()),
        ("Lý do", payout.reason.display_name().to_string()),
        ("Chỉ số kích hoạt", payout.trigger_parameter.clone().unwrap_or_else(|| "—".to_string())),
        ("Số tiền", format_amount(payout.amount, &payout.currency)),
        ("Ngày tạo", format_datetime(&payout.created_at)),
        ("Ngày chi", format_opt_datetime(payout.paid_at)),
        ("Mã giao dịch", payout.transaction_ref.clone().unwrap_or_else(|| "—".to_string())),
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
