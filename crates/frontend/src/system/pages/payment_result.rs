//! Landing pages the payment gateway redirects to. They only display what
//! the query string says; the backend confirms the payment separately.

use contracts::shared::payment::{PaymentOutcome, PaymentRedirect};
use leptos::prelude::*;

use crate::shared::components::table::format_vnd;
use crate::shared::icons::icon;

fn current_redirect() -> PaymentRedirect {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    PaymentRedirect::from_query(&search)
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let redirect = current_redirect();
    if redirect.outcome() != PaymentOutcome::Success {
        log::warn!("success page reached with a non-success redirect: {:?}", redirect);
    }
    let order_id = redirect.order_id.clone().unwrap_or_else(|| "—".to_string());
    let amount = redirect
        .amount_value()
        .map(format_vnd)
        .unwrap_or_else(|| "—".to_string());

    view! {
        <div class="payment-result payment-result--success">
            <div class="payment-result__icon">{icon("check")}</div>
            <h1>"Thanh toán thành công"</h1>
            <dl class="details-grid">
                <dt>"Mã đơn hàng"</dt>
                <dd>{order_id}</dd>
                <dt>"Số tiền"</dt>
                <dd>{amount}</dd>
            </dl>
            <a href="/" class="btn btn-primary">"Về trang chính"</a>
        </div>
    }
}

#[component]
pub fn PaymentFailurePage() -> impl IntoView {
    let redirect = current_redirect();
    let order_id = redirect.order_id.clone().unwrap_or_else(|| "—".to_string());
    let reason = redirect
        .failure_text()
        .unwrap_or("Giao dịch không thành công")
        .to_string();

    view! {
        <div class="payment-result payment-result--failure">
            <div class="payment-result__icon">{icon("x-circle")}</div>
            <h1>"Thanh toán thất bại"</h1>
            <dl class="details-grid">
                <dt>"Mã đơn hàng"</dt>
                <dd>{order_id}</dd>
                <dt>"Lý do"</dt>
                <dd>{reason}</dd>
            </dl>
            <a href="/" class="btn btn-secondary">"Về trang chính"</a>
        </div>
    }
}
