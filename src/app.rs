//! Bookstore Frontend App
//!
//! Root component: shared context, toasts and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::ToastHost;
use crate::context::AppContext;
use crate::pages::{BookDetailsPage, NotFoundPage, ProfilePage, StationeryDetailsPage};
use crate::session::load_session;
use crate::toast::ToastQueue;

#[component]
pub fn App() -> impl IntoView {
    let session = load_session();
    log::info!("[APP] Starting, authenticated={}", session.is_authenticated());

    // Provide context to all children
    provide_context(AppContext::new(signal(session), signal(ToastQueue::default())));

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/books/:slug") view=BookDetailsPage />
                    <Route path=path!("/stationery/:slug") view=StationeryDetailsPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
