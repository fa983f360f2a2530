//! Not Found Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-state">
            <h1>"Không tìm thấy trang"</h1>
            <A href="/">"← Về Trang Chủ"</A>
        </div>
    }
}

/// Primary entity failed to load
#[component]
pub fn ItemNotFound(
    #[prop(into)] heading: String,
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <div class="page-state">
            <div class="page-state-icon">"📚"</div>
            <h1>{heading}</h1>
            <p>{message}</p>
            <A href=back_href>{format!("← {back_label}")}</A>
        </div>
    }
}

#[component]
pub fn PageLoading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-state">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
