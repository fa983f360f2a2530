//! Read Sample Modal Component
//!
//! Pages of a book's reading sample.

use leptos::prelude::*;

use super::paged_image_viewer::PagedImageViewer;

#[component]
pub fn ReadSampleModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Full URLs of the sample pages
    #[prop(into)] pages: Signal<Vec<String>>,
    #[prop(into)] book_title: String,
) -> impl IntoView {
    view! {
        <PagedImageViewer
            open=open
            on_close=on_close
            images=pages
            heading="Đọc thử"
            subtitle=book_title
            alt_prefix="Trang mẫu"
        />
    }
}
