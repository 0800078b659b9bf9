pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

use center::Center;
use global_context::use_tabs;
use left::{Left, Sidebar};
use top_header::TopHeader;

/// Signed-in application frame.
///
/// ```text
/// +-------------------------------+
/// |           TopHeader           |
/// +---------+---------------------+
/// | Sidebar |  tab strip + pages  |
/// +---------+---------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_tabs();

    // Restores ?active= once and keeps it in sync afterwards
    tabs_store.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>
                <div class="app-main">
                    <Center />
                </div>
            </div>
        </div>
    }
}
