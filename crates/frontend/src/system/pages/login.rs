use chrono::Utc;
use contracts::shared::messages::MessageDomain;
use contracts::shared::validation::is_valid_email;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        if !is_valid_email(&email_val) {
            set_error_message.set(Some("Email không hợp lệ".to_string()));
            return;
        }
        if password_val.is_empty() {
            set_error_message.set(Some("Vui lòng nhập mật khẩu".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::sign_in(email_val, password_val).await {
                Ok(response) => {
                    // Switches the shell over to the main layout
                    auth.sign_in(response.into_session(Utc::now()));
                }
                Err(failure) => {
                    log::warn!("sign-in failed: {}", failure);
                    set_error_message.set(Some(failure.user_message(MessageDomain::Auth)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Cổng đối tác bảo hiểm nông nghiệp"</h1>
                <h2>"Đăng nhập"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="doitac@congty.vn"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Mật khẩu"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
