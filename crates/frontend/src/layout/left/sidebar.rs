//! Sidebar with collapsible menu groups.

use contracts::system::auth::PartnerRole;
use leptos::prelude::*;

use crate::layout::global_context::use_tabs;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    /// Hidden unless the signed-in role passes.
    allow: Option<fn(&PartnerRole) -> bool>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "products",
            label: "Sản phẩm & hợp đồng",
            icon: "shield",
            items: vec![
                ("a001_base_policy", "shield"),
                ("a002_registered_policy", "file-text"),
            ],
            allow: None,
        },
        MenuGroup {
            id: "claims",
            label: "Bồi thường & hủy",
            icon: "wallet",
            items: vec![
                ("a003_payout", "wallet"),
                ("a004_cancellation_request", "x-circle"),
            ],
            allow: None,
        },
        MenuGroup {
            id: "farmers",
            label: "Nông hộ",
            icon: "users",
            items: vec![("a005_beneficiary", "users")],
            allow: None,
        },
        MenuGroup {
            id: "tools",
            label: "Công cụ",
            icon: "settings",
            items: vec![("u501_template_placeholders", "file-text")],
            allow: Some(PartnerRole::can_review),
        },
        MenuGroup {
            id: "account",
            label: "Tài khoản",
            icon: "user",
            items: vec![("a006_notification", "bell"), ("sys_profile", "user")],
            allow: None,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_tabs();
    let auth = use_auth();
    let role = auth.role();

    let expanded_groups = RwSignal::new(vec!["products".to_string(), "claims".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().filter(|group| match (group.allow, role.as_ref()) {
                (None, _) => true,
                (Some(allow), Some(role)) => allow(role),
                (Some(_), None) => false,
            }).map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, &tab_label_for_key(key))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{tab_label_for_key(key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
