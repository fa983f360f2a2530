//! Paged Image Viewer Component
//!
//! Overlay showing one image at a time with prev/next buttons, a page
//! indicator and thumbnails. Used by the image and read-sample viewers.

use leptos::prelude::*;

use super::hooks::{use_modal_keys, use_scroll_lock};
use crate::keys::{viewer_key, ModalKey};
use crate::paging::PageCursor;

/// The overlay only exists while open with at least one image
pub fn viewer_visible(open: bool, image_count: usize) -> bool {
    open && image_count > 0
}

#[component]
pub fn PagedImageViewer(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] images: Signal<Vec<String>>,
    #[prop(into)] heading: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Alt text prefix; the 1-based page number is appended
    #[prop(into)] alt_prefix: String,
) -> impl IntoView {
    let cursor = RwSignal::new(PageCursor::default());
    let visible = Signal::derive(move || viewer_visible(open.get(), images.with(Vec::len)));

    // Start from the first page on every open
    Effect::new(move |_| {
        let len = images.with(Vec::len);
        if open.get() {
            cursor.update(|c| c.reset(len));
        }
    });

    use_scroll_lock(visible);
    use_modal_keys(
        visible,
        viewer_key,
        Callback::new(move |key: ModalKey| match key {
            ModalKey::Close => on_close.run(()),
            ModalKey::Prev => cursor.update(PageCursor::prev),
            ModalKey::Next => cursor.update(PageCursor::next),
            _ => {}
        }),
    );

    let current_src = move || {
        let index = cursor.with(PageCursor::index);
        images.with(|list| list.get(index).cloned().unwrap_or_default())
    };

    view! {
        <Show when=move || visible.get()>
            <div class="viewer-overlay">
                <div class="viewer">
                    <div class="viewer-header">
                        <div>
                            <h2>{heading.clone()}</h2>
                            {subtitle.clone().map(|s| view! { <p class="viewer-subtitle">{s}</p> })}
                        </div>
                        <button class="viewer-close" aria-label="Đóng" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>

                    <div class="viewer-stage">
                        <img
                            src=current_src
                            alt={
                                let alt_prefix = alt_prefix.clone();
                                move || format!("{} {}", alt_prefix, cursor.with(PageCursor::index) + 1)
                            }
                        />
                        <Show when=move || cursor.with(PageCursor::is_paged)>
                            <button
                                class="viewer-nav viewer-prev"
                                disabled=move || !cursor.with(PageCursor::has_prev)
                                on:click=move |_| cursor.update(PageCursor::prev)
                            >
                                "‹"
                            </button>
                            <button
                                class="viewer-nav viewer-next"
                                disabled=move || !cursor.with(PageCursor::has_next)
                                on:click=move |_| cursor.update(PageCursor::next)
                            >
                                "›"
                            </button>
                        </Show>
                    </div>

                    <div class="viewer-footer">
                        <span class="viewer-indicator">{move || cursor.with(PageCursor::indicator)}</span>
                        <Show when=move || cursor.with(PageCursor::is_paged)>
                            <div class="viewer-thumbs">
                                {move || {
                                    images
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, src)| {
                                            view! {
                                                <button
                                                    class="viewer-thumb"
                                                    class:active=move || cursor.with(PageCursor::index) == i
                                                    on:click=move |_| cursor.update(|c| c.go_to(i))
                                                >
                                                    <img src=src alt=format!("Thumbnail {}", i + 1) />
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_hidden_without_images() {
        assert!(!viewer_visible(true, 0));
        assert!(!viewer_visible(false, 3));
        assert!(viewer_visible(true, 1));
    }
}
