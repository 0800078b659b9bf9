use contracts::shared::placeholders::{PlaceholderMap, ScanError, ScanReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{field_label, suggest_field, TEMPLATE_FIELDS};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::image_upload::picked_file;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::pdf;

fn scan_error_text(err: &ScanError) -> String {
    match err {
        ScanError::NoFile => "Vui lòng chọn tệp PDF".to_string(),
        ScanError::Unparseable(_) => "Không đọc được tệp PDF. Vui lòng kiểm tra lại tệp.".to_string(),
    }
}

#[component]
pub fn TemplatePlaceholdersPage() -> impl IntoView {
    let report = RwSignal::new(None::<ScanReport>);
    let map = RwSignal::new(PlaceholderMap::default());
    let file_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let is_scanning = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        let file = picked_file(&ev);
        file_name.set(file.as_ref().map(|f| f.name()));
        error.set(None);
        is_scanning.set(true);
        spawn_local(async move {
            match pdf::scan_file(file).await {
                Ok(scanned) => {
                    let mut working = PlaceholderMap::new(scanned.placeholders.clone());
                    let keys: Vec<String> =
                        working.unmapped().iter().map(|p| p.extracted_key.clone()).collect();
                    for key in keys {
                        if let Some(tag) = suggest_field(&key) {
                            working.bind_key(&key, tag);
                        }
                    }
                    log::info!(
                        "template scanned: {} placeholder(s), {} page error(s)",
                        scanned.placeholders.len(),
                        scanned.page_errors.len()
                    );
                    map.set(working);
                    report.set(Some(scanned));
                }
                Err(err) => {
                    log::warn!("template scan failed: {}", err);
                    error.set(Some(scan_error_text(&err)));
                    map.set(PlaceholderMap::default());
                    report.set(None);
                }
            }
            is_scanning.set(false);
        });
    };

    let bind = move |id: String, key: String, tag: String, all: bool| {
        map.update(|m| {
            if tag.is_empty() {
                m.unbind(&id);
            } else if all {
                m.bind_key(&key, &tag);
            } else {
                m.bind(&id, tag);
            }
        });
    };

    let unmapped_count = Signal::derive(move || map.with(|m| m.unmapped().len()));
    let bindings_json = move || {
        map.with(|m| serde_json::to_string_pretty(&m.bindings()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id="u501_template_placeholders--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Mẫu hợp đồng PDF"</h1>
                    {move || report.with(|r| r.as_ref().map(|r| view! {
                        <UiBadge variant="primary".to_string()>
                            {format!("{} trang", r.page_count)}
                        </UiBadge>
                    }))}
                </div>
            </div>

            <div class="page__content">
                <div class="form-group">
                    <label for="template_file">"Tệp mẫu (PDF)"</label>
                    <input
                        type="file"
                        id="template_file"
                        accept="application/pdf"
                        on:change=on_file
                        disabled=move || is_scanning.get()
                    />
                    {move || file_name.get().map(|name| view! { <span class="form-hint">{name}</span> })}
                </div>

                <Show when=move || is_scanning.get()>
                    <div class="loading">"Đang đọc tệp..."</div>
                </Show>

                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || report.with(|r| r.as_ref().filter(|r| r.is_partial()).map(|r| {
                    let pages = r.page_errors.iter().map(|e| e.page.to_string()).collect::<Vec<_>>().join(", ");
                    view! {
                        <div class="alert alert--warning">
                            {format!("Không đọc được trang: {}. Kết quả có thể chưa đầy đủ.", pages)}
                        </div>
                    }
                }))}

                <Show when=move || report.with(|r| r.as_ref().is_some_and(|r| r.placeholders.is_empty()))>
                    <div class="alert alert--warning">"Không tìm thấy trường nào trong mẫu."</div>
                </Show>

                <Show when=move || map.with(|m| !m.items().is_empty())>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {move || if map.with(|m| m.is_complete()) {
                            view! { <UiBadge variant="success".to_string()>"Đã gán đủ"</UiBadge> }.into_any()
                        } else {
                            view! {
                                <UiBadge variant="warning".to_string()>
                                    {move || format!("Còn {} trường chưa gán", unmapped_count.get())}
                                </UiBadge>
                            }.into_any()
                        }}
                    </Flex>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Trường"</TableHeaderCell>
                                    <TableHeaderCell>"Khóa"</TableHeaderCell>
                                    <TableHeaderCell>"Dạng"</TableHeaderCell>
                                    <TableHeaderCell>"Trang"</TableHeaderCell>
                                    <TableHeaderCell>"Vị trí"</TableHeaderCell>
                                    <TableHeaderCell min_width=220.0>"Gán dữ liệu"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || map.with(|m| m.items().to_vec())
                                    key=|p| (p.id.clone(), p.tag_id.clone())
                                    children=move |p| {
                                        let id = p.id.clone();
                                        let key = p.extracted_key.clone();
                                        let id_all = id.clone();
                                        let key_all = key.clone();
                                        let current = p.tag_id.clone().unwrap_or_default();
                                        let current_all = current.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><code>{p.original.clone()}</code></TableCell>
                                                <TableCell>{p.extracted_key.clone()}</TableCell>
                                                <TableCell>{p.kind.code()}</TableCell>
                                                <TableCell>{p.page}</TableCell>
                                                <TableCell>
                                                    {format!("{:.0}, {:.0}", p.position.x, p.position.y)}
                                                </TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <select
                                                            class="form-select"
                                                            prop:value=current.clone()
                                                            on:change=move |ev| bind(id.clone(), key.clone(), event_target_value(&ev), false)
                                                        >
                                                            <option value="">"Chưa gán"</option>
                                                            {TEMPLATE_FIELDS.iter().map(|(tag, label)| view! {
                                                                <option value=*tag selected=current == *tag>{*label}</option>
                                                            }).collect_view()}
                                                        </select>
                                                        <button
                                                            class="btn btn-secondary"
                                                            title="Áp dụng cho mọi vị trí cùng khóa"
                                                            disabled=current_all.is_empty()
                                                            on:click=move |_| bind(id_all.clone(), key_all.clone(), current_all.clone(), true)
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                    </Flex>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <div class="details-form">
                        <h3>"Bảng gán"</h3>
                        <ul class="binding-list">
                            {move || map.with(|m| m.bindings().into_iter().map(|(key, tag)| view! {
                                <li><code>{key}</code>" → "{field_label(&tag).to_string()}</li>
                            }).collect_view())}
                        </ul>
                        <pre class="json-preview">{bindings_json}</pre>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
