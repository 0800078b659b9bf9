//! New cancellation request filed by the partner: an active policy, a reason
//! and optional evidence photos.

use contracts::domain::a002_registered_policy::aggregate::PolicyStatus;
use contracts::domain::a004_cancellation_request::aggregate::CreateCancellationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_registered_policy::hooks::use_registered_policies;
use crate::domain::a004_cancellation_request::hooks::use_cancellation_commands;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::icons::icon;
use crate::shared::image_upload::{picked_file, upload_image, upload_message};

#[component]
pub fn CancellationRequestCreate(on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_tabs();
    let policies = use_registered_policies();
    let commands = use_cancellation_commands();

    let form = RwSignal::new(CreateCancellationRequest::default());
    let error = RwSignal::new(Option::<String>::None);
    let is_uploading = RwSignal::new(false);
    let is_saving = RwSignal::new(false);

    let active_policies = Memo::new(move |_| {
        policies.list.data.with(|data| {
            data.as_ref()
                .map(|items| {
                    items
                        .iter()
                        .filter(|p| p.status == PolicyStatus::Active)
                        .map(|p| (p.id.clone(), format!("{} · {}", p.policy_number, p.farmer_name)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    let on_file = move |ev: leptos::ev::Event| {
        let file = picked_file(&ev);
        is_uploading.set(true);
        error.set(None);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => form.update(|f| f.evidence_urls.push(url)),
                Err(e) => {
                    log::warn!("evidence upload failed: {:?}", e);
                    error.set(Some(upload_message(&e)));
                }
            }
            is_uploading.set(false);
        });
    };

    let remove_evidence = move |index: usize| {
        form.update(|f| {
            if index < f.evidence_urls.len() {
                f.evidence_urls.remove(index);
            }
        });
    };

    let submit = move |_| {
        let request = form.get_untracked();
        if let Some(msg) = request.validate().first() {
            error.set(Some(msg.to_string()));
            return;
        }
        error.set(None);
        is_saving.set(true);
        spawn_local(async move {
            let result = commands.create(request).await;
            is_saving.set(false);
            match (result.success, result.data) {
                (true, Some(created)) => {
                    tabs_store.open_tab(
                        &detail_tab_key("a004_cancellation_request", Some(&created.id)),
                        &detail_tab_label("Yêu cầu hủy", Some(&created.policy_number)),
                    );
                    on_close.run(());
                }
                _ => error.set(result.message),
            }
        });
    };

    view! {
        <div class="details-container cancellation-create">
            <div class="details-header">
                <h3>"Tạo yêu cầu hủy hợp đồng"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || policies.list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="policy_id">"Hợp đồng"</label>
                    <select
                        id="policy_id"
                        class="form-select"
                        prop:value=move || form.with(|f| f.policy_id.clone())
                        on:change=move |ev| form.update(|f| f.policy_id = event_target_value(&ev))
                    >
                        <option value="">
                            {move || if policies.list.loading.get() { "Đang tải..." } else { "-- Chọn hợp đồng đang hiệu lực --" }}
                        </option>
                        {move || active_policies.get().into_iter().map(|(id, label)| view! {
                            <option value=id>{label}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="reason">"Lý do hủy"</label>
                    <textarea
                        id="reason"
                        rows="4"
                        placeholder="Ít nhất 10 ký tự"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="evidence">"Ảnh bằng chứng"</label>
                    <input
                        type="file"
                        id="evidence"
                        accept="image/jpeg,image/png,image/gif,image/webp"
                        on:change=on_file
                        disabled=move || is_uploading.get()
                    />
                    {move || is_uploading.get().then(|| view! { <span class="form-hint">"Đang tải ảnh lên..."</span> })}
                    <div class="evidence-gallery">
                        {move || form.with(|f| f.evidence_urls.clone()).into_iter().enumerate().map(|(index, url)| view! {
                            <div class="evidence-gallery__cell">
                                <img src=url alt="Bằng chứng" class="evidence-gallery__item" />
                                <button type="button" class="btn btn-icon" title="Xóa" on:click=move |_| remove_evidence(index)>
                                    {icon("x")}
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || is_saving.get() || is_uploading.get()
                >
                    {icon("save")}
                    " Gửi yêu cầu"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    " Hủy"
                </button>
            </div>
        </div>
    }
}
