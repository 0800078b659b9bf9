use chrono::Utc;
use contracts::system::profile::{DeletionStatus, PartnerProfile, UpdateProfileDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::hooks::use_profile;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::icons::icon;
use crate::shared::image_upload::{picked_file, upload_image, upload_message};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let profile = use_profile();

    let form = RwSignal::new(UpdateProfileDto::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let is_busy = RwSignal::new(false);
    let deletion_reason = RwSignal::new(String::new());

    Effect::new(move |_| {
        profile.current.data.with(|p| {
            if let Some(p) = p {
                form.set(UpdateProfileDto::from(p));
            }
        });
    });

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|e| e.get(field))
                .map(|msg| view! { <span class="form-error">{msg}</span> })
        }
    };

    let save = move |_| {
        let dto = form.get_untracked();
        let errors = dto.validate();
        if let Some(first) = errors.first() {
            error.set(Some(first.to_string()));
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        error.set(None);
        notice.set(None);
        is_busy.set(true);
        spawn_local(async move {
            let result = profile.update(dto).await;
            is_busy.set(false);
            if result.success {
                notice.set(Some("Đã lưu hồ sơ".to_string()));
            } else {
                error.set(result.message);
            }
        });
    };

    let on_logo = move |ev: leptos::ev::Event| {
        let file = picked_file(&ev);
        is_busy.set(true);
        error.set(None);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => form.update(|f| f.logo_url = Some(url)),
                Err(e) => {
                    log::warn!("logo upload failed: {}", e);
                    error.set(Some(upload_message(&e)));
                }
            }
            is_busy.set(false);
        });
    };

    let request_deletion = move |_| {
        let reason = optional(deletion_reason.get_untracked());
        error.set(None);
        notice.set(None);
        is_busy.set(true);
        spawn_local(async move {
            let result = profile.request_deletion(reason).await;
            is_busy.set(false);
            if result.success {
                deletion_reason.set(String::new());
                notice.set(Some("Đã gửi yêu cầu xóa tài khoản".to_string()));
            } else {
                error.set(result.message);
            }
        });
    };

    let revoke_deletion = move |_| {
        error.set(None);
        notice.set(None);
        is_busy.set(true);
        spawn_local(async move {
            let result = profile.revoke_deletion().await;
            is_busy.set(false);
            if result.success {
                notice.set(Some("Đã thu hồi yêu cầu xóa tài khoản".to_string()));
            } else {
                error.set(result.message);
            }
        });
    };

    view! {
        <PageFrame page_id="sys_profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Hồ sơ đối tác"</h1>
                    {move || auth.user().map(|u| view! {
                        <UiBadge variant="primary".to_string()>
                            {format!("{} · {}", u.display_name(), u.role.display_name())}
                        </UiBadge>
                    })}
                </div>
            </div>

            <div class="page__content">
                {move || profile.current.loading.get().then(|| view! { <div class="loading">"Đang tải..."</div> })}
                {move || profile.current.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="partner_name">"Tên đối tác"</label>
                        <input
                            type="text"
                            id="partner_name"
                            prop:value=move || form.with(|f| f.partner_name.clone())
                            on:input=move |ev| form.update(|f| f.partner_name = event_target_value(&ev))
                        />
                        {field_error("partner_name")}
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="tax_code">"Mã số thuế"</label>
                            <input
                                type="text"
                                id="tax_code"
                                prop:value=move || form.with(|f| f.tax_code.clone())
                                on:input=move |ev| form.update(|f| f.tax_code = event_target_value(&ev).trim().to_string())
                            />
                            {field_error("tax_code")}
                        </div>
                        <div class="form-group">
                            <label for="phone">"Điện thoại"</label>
                            <input
                                type="tel"
                                id="phone"
                                prop:value=move || form.with(|f| f.phone.clone().unwrap_or_default())
                                on:input=move |ev| form.update(|f| f.phone = optional(event_target_value(&ev)))
                            />
                            {field_error("phone")}
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || form.with(|f| f.email.clone().unwrap_or_default())
                                on:input=move |ev| form.update(|f| f.email = optional(event_target_value(&ev)))
                            />
                            {field_error("email")}
                        </div>
                        <div class="form-group">
                            <label for="website">"Website"</label>
                            <input
                                type="url"
                                id="website"
                                prop:value=move || form.with(|f| f.website.clone().unwrap_or_default())
                                on:input=move |ev| form.update(|f| f.website = optional(event_target_value(&ev)))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="address">"Địa chỉ"</label>
                        <input
                            type="text"
                            id="address"
                            prop:value=move || form.with(|f| f.address.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.address = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="logo">"Logo"</label>
                        {move || form.with(|f| f.logo_url.clone()).map(|url| view! {
                            <img src=url alt="Logo" class="profile-logo" />
                        })}
                        <input
                            type="file"
                            id="logo"
                            accept="image/jpeg,image/png,image/gif,image/webp"
                            on:change=on_logo
                            disabled=move || is_busy.get()
                        />
                    </div>
                    <div class="details-actions">
                        <button class="btn btn-primary" on:click=save disabled=move || is_busy.get()>
                            {icon("save")}
                            " Lưu hồ sơ"
                        </button>
                    </div>
                </div>

                <div class="details-form danger-zone">
                    <h4>"Xóa tài khoản đối tác"</h4>
                    {move || {
                        let request = profile.current.data.with(|p| {
                            p.as_ref().and_then(|p: &PartnerProfile| p.deletion_request.clone())
                        });
                        match request {
                            Some(req) if req.status == DeletionStatus::Pending => {
                                let revocable = req.can_revoke(Utc::now());
                                view! {
                                    <div class="alert alert--warning">
                                        {format!(
                                            "Yêu cầu xóa gửi lúc {}. Có thể thu hồi đến {}.",
                                            format_datetime(&req.requested_at),
                                            format_opt_datetime(req.revocable_until),
                                        )}
                                    </div>
                                    <Show when=move || revocable>
                                        <button class="btn btn-secondary" on:click=revoke_deletion disabled=move || is_busy.get()>
                                            {icon("x")}
                                            " Thu hồi yêu cầu xóa"
                                        </button>
                                    </Show>
                                }
                                .into_any()
                            }
                            _ => view! {
                                <div class="form-group">
                                    <label for="deletion_reason">"Lý do (không bắt buộc)"</label>
                                    <textarea
                                        id="deletion_reason"
                                        rows="2"
                                        prop:value=move || deletion_reason.get()
                                        on:input=move |ev| deletion_reason.set(event_target_value(&ev))
                                    />
                                </div>
                                <button class="btn btn-danger" on:click=request_deletion disabled=move || is_busy.get()>
                                    {icon("trash")}
                                    " Yêu cầu xóa tài khoản"
                                </button>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
