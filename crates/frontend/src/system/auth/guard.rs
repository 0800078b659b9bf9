use contracts::system::auth::PartnerRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for roles allowed by `allow`; shows a notice otherwise.
#[component]
pub fn RequireRole(allow: fn(&PartnerRole) -> bool, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.role().map(|r| allow(&r)).unwrap_or(false)
            fallback=|| view! { <div class="alert alert--warning">"Bạn không có quyền thực hiện thao tác này"</div> }
        >
            {children()}
        </Show>
    }
}
