use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_tabs, Tab as TabData};
use crate::layout::tabs::TabPage;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = use_tabs();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.title.clone()>
            <span>{tab.title.clone()}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab strip plus the pages of every open tab. Inactive pages stay mounted
/// so their filters and forms survive switching.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_tabs();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs-container">
                <div class="tabs-bar">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabHandle tab=tab /> }
                    />
                </div>
                <div class="tab-content">
                    <Show
                        when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                        fallback=|| view! {
                            <div class="tabs__empty">"Chọn một mục trong menu bên trái để bắt đầu."</div>
                        }
                    >
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
