use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use crate::system::pages::payment_result::{PaymentFailurePage, PaymentSuccessPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <AppShell /> }>
                    <Route path=path!("/payment/success") view=PaymentSuccessPage />
                    <Route path=path!("/payment/failure") view=PaymentFailurePage />
                    <Route path=path!("/") view=AppShell />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
