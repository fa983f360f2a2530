//! Image Viewer Modal Component
//!
//! Full-size product gallery.

use leptos::prelude::*;

use super::paged_image_viewer::PagedImageViewer;

#[component]
pub fn ImageViewerModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] images: Signal<Vec<String>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <PagedImageViewer
            open=open
            on_close=on_close
            images=images
            heading=title.unwrap_or_else(|| "Xem ảnh".to_string())
            alt_prefix="Ảnh"
        />
    }
}
