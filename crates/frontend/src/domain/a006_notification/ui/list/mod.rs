use contracts::domain::a006_notification::aggregate::{Notification, SEARCH_FIELDS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_notification::hooks::use_notifications;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{form_values, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Backend link prefixes and the entity whose detail tab they open.
const LINK_ROUTES: &[(&str, &str)] = &[
    ("/base-policies/", "a001_base_policy"),
    ("/policies/", "a002_registered_policy"),
    ("/payouts/", "a003_payout"),
    ("/cancellations/", "a004_cancellation_request"),
    ("/beneficiaries/", "a005_beneficiary"),
];

/// Where a notification link leads inside the console.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkTarget {
    Tab(String),
    External(String),
}

pub fn link_target(link: &str) -> Option<LinkTarget> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    if link.starts_with("http://") || link.starts_with("https://") {
        return Some(LinkTarget::External(link.to_string()));
    }
    let path = link.split(['?', '#']).next().unwrap_or(link);
    for (prefix, entity) in LINK_ROUTES {
        if let Some(id) = path.strip_prefix(prefix) {
            let id = id.trim_end_matches('/');
            if !id.is_empty() && !id.contains('/') {
                return Some(LinkTarget::Tab(detail_tab_key(entity, Some(id))));
            }
        }
    }
    None
}

#[component]
pub fn NotificationList() -> impl IntoView {
    let tabs_store = use_tabs();
    let notifications = use_notifications();
    let state = RwSignal::new(ListState::<Notification>::new(SEARCH_FIELDS, &config().list));
    let is_filter_expanded = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let search = RwSignal::new(String::new());
    let read = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(items) = notifications.list.data.get() {
            state.update(|s| s.load(items));
        }
    });

    let apply_filters = move || {
        let values = form_values([
            ("search", search.get_untracked()),
            ("read", read.get_untracked()),
        ]);
        state.update(|s| s.submit(&values));
    };

    let clear_filters = move || {
        search.set(String::new());
        read.set(String::new());
        state.update(|s| s.clear_filters());
    };

    let open = move |item: Notification| {
        if !item.read {
            let id = item.id.clone();
            spawn_local(async move {
                let result = notifications.mark_read(id).await;
                if !result.success {
                    error.set(result.message);
                }
            });
        }
        match item.link.as_deref().and_then(link_target) {
            Some(LinkTarget::Tab(key)) => tabs_store.open_tab(&key, &tab_label_for_key(&key)),
            Some(LinkTarget::External(url)) => {
                if let Some(w) = web_sys::window() {
                    let _ = w.open_with_url_and_target(&url, "_blank");
                }
            }
            None => {}
        }
    };

    let mark_all = move |_| {
        spawn_local(async move {
            let result = notifications.mark_all_read().await;
            if !result.success {
                error.set(result.message);
            }
        });
    };

    view! {
        <PageFrame page_id="a006_notification--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Thông báo"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || format!("{} chưa đọc", notifications.unread())}
                    </UiBadge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| notifications.refetch()
                        disabled=Signal::derive(move || notifications.list.loading.get())
                    >
                        {icon("refresh")}
                        " Làm mới"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=mark_all
                        disabled=Signal::derive(move || notifications.unread() == 0)
                    >
                        {icon("check")}
                        " Đánh dấu tất cả đã đọc"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.criteria().active_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.view.current_page()))
                            total_pages=Signal::derive(move || state.with(|s| s.view.total_pages()))
                            total_count=Signal::derive(move || state.with(|s| s.view.total_count()))
                            page_size=Signal::derive(move || state.with(|s| s.view.page_size()))
                            on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                            page_size_options=config().list.page_size_options.clone()
                        />
                    }
                    actions=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                            "Lọc"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear_filters()>
                            "Xóa lọc"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Tìm kiếm:"</Label>
                            <Input value=search placeholder="Tiêu đề, nội dung..." />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || read.get()
                                on:change=move |ev| read.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                <option value="false">"Chưa đọc"</option>
                                <option value="true">"Đã đọc"</option>
                            </select>
                        </Flex>
                    </Flex>
                </FilterPanel>

                {move || notifications.list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <ul class="notification-list">
                    <For
                        each=move || state.with(|s| s.rows())
                        key=|item| (item.id.clone(), item.read)
                        children=move |item: Notification| {
                            let class = if item.read {
                                "notification-list__item"
                            } else {
                                "notification-list__item notification-list__item--unread"
                            };
                            let target = item.clone();
                            view! {
                                <li class=class on:click=move |_| open(target.clone())>
                                    <div class="notification-list__title">
                                        {icon("bell")}
                                        <strong>{item.title.clone()}</strong>
                                        {(!item.read).then(|| view! {
                                            <UiBadge variant="warning".to_string()>"Mới"</UiBadge>
                                        })}
                                    </div>
                                    <div class="notification-list__body">{item.body.clone()}</div>
                                    <div class="notification-list__meta">{format_datetime(&item.created_at)}</div>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || state.with(|s| s.is_loaded && s.view.total_count() == 0)>
                    <div class="empty-state">"Không có thông báo"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_target() {
        assert_eq!(
            link_target("/cancellations/42"),
            Some(LinkTarget::Tab("a004_cancellation_request_detail_42".to_string()))
        );
        assert_eq!(
            link_target("/policies/p-7/?from=push"),
            Some(LinkTarget::Tab("a002_registered_policy_detail_p-7".to_string()))
        );
        assert_eq!(
            link_target("https://example.vn/a"),
            Some(LinkTarget::External("https://example.vn/a".to_string()))
        );
        assert_eq!(link_target("/payouts/"), None);
        assert_eq!(link_target("/unknown/1"), None);
        assert_eq!(link_target(""), None);
    }
}
