//! Top bar: sidebar toggle, title, notification bell, signed-in user and
//! sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_notification::hooks::use_notifications;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();
    let auth = use_auth();

    let notifications = use_notifications();
    notifications.poll();
    let unread = Signal::derive(move || notifications.unread());

    let open = move |key: &'static str| ctx.open_tab(key, &tab_label_for_key(key));

    let logout = move |_| {
        // Tell the backend when possible; the local session goes either way
        if let Ok(client) = auth.client() {
            spawn_local(async move {
                if let Err(failure) = api::sign_out(&client).await {
                    log::warn!("sign-out request failed: {}", failure);
                }
            });
        }
        ctx.close_all();
        auth.sign_out();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ẩn menu" } else { "Hiện menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Cổng đối tác bảo hiểm nông nghiệp"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn top-header__bell"
                    title="Thông báo"
                    on:click=move |_| open("a006_notification")
                >
                    {icon("bell")}
                    <Show when=move || { unread.get() > 0 }>
                        <span class="top-header__badge">
                            {move || {
                                let n = unread.get();
                                if n > 99 { "99+".to_string() } else { n.to_string() }
                            }}
                        </span>
                    </Show>
                </button>

                <button
                    class="top-header__user"
                    title="Hồ sơ đối tác"
                    on:click=move |_| open("sys_profile")
                >
                    {icon("user")}
                    <span>
                        {move || auth.user().map(|u| u.display_name().to_string()).unwrap_or_default()}
                    </span>
                    <span class="top-header__role">
                        {move || auth.role().map(|r| r.display_name()).unwrap_or_default()}
                    </span>
                </button>

                <button class="top-header__icon-btn" on:click=logout title="Đăng xuất">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
