//! Book Details Page
//!
//! `/books/:slug` where the parameter is either a numeric id or a slug.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{media_urls, ItemNotFound, PageLoading};
use crate::api::{self, ApiError};
use crate::components::{
    AudioSampleModal, ImageViewerModal, ProductDetailLayout, ProductDetails, ReadSampleModal,
    ReviewSection,
};
use crate::config::get_book_cover_url;
use crate::context::{use_app_context, AppContext};
use crate::currency::format_price;
use crate::dates::format_date;
use crate::models::{parse_sample_pages, Book, ProductKey};
use crate::review::ReviewSubject;
use crate::toast::ToastKind;

async fn fetch_book(key: ProductKey) -> Result<Book, ApiError> {
    match key {
        ProductKey::Id(id) => api::get_book(id).await,
        ProductKey::Slug(slug) => api::get_book_by_slug(&slug).await,
    }
}

fn book_details(book: &Book) -> ProductDetails {
    ProductDetails {
        title: book.title.clone(),
        images: media_urls(book.image_paths()),
        price_text: format_price(book.discounted_price.unwrap_or(book.price)),
        old_price_text: Some(format_price(book.price)),
        discount_price_text: book.discounted_price.map(format_price),
        stock: book.stock(),
        categories: book.categories.iter().map(|c| c.name.clone()).collect(),
        brief_description: book.brief_description.clone(),
        full_description: book.full_description.clone(),
        badges: book.badges(),
        author_text: book.author_names(),
        isbn_text: book.isbn.clone().filter(|s| !s.is_empty()),
        sku_text: None,
        publish_date_text: book.publication_date.as_deref().map(format_date),
        back_link: ("/books".to_string(), "Sách".to_string()),
    }
}

#[component]
pub fn BookDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let (book, set_book) = signal(None::<Book>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Load book when the route parameter changes
    Effect::new(move |_| {
        let param = params.with(|p| p.get("slug").unwrap_or_default());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_book(ProductKey::parse(&param)).await {
                Ok(loaded) => {
                    log::debug!("[BOOK] Loaded {} ({})", loaded.title, loaded.book_id);
                    set_book.set(Some(loaded));
                }
                Err(e) => {
                    log::warn!("[BOOK] Failed to load {}: {}", param, e);
                    set_book.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <PageLoading message="Đang tải thông tin sách..." /> }.into_any();
            }
            match book.get() {
                Some(book) => view! { <BookDetails book=book /> }.into_any(),
                None => view! {
                    <ItemNotFound
                        heading="Không tìm thấy sách"
                        message=error.get().unwrap_or_else(|| "Cuốn sách bạn tìm không tồn tại.".to_string())
                        back_href="/books"
                        back_label="Xem tất cả sách"
                    />
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn BookDetails(book: Book) -> impl IntoView {
    let ctx = use_app_context();
    let details = book_details(&book);
    let gallery = details.images.clone();
    let has_gallery = !gallery.is_empty();
    let title = book.title.clone();

    let (viewer_open, set_viewer_open) = signal(false);
    let (sample_open, set_sample_open) = signal(false);
    let (audio_open, set_audio_open) = signal(false);
    let sample_pages = RwSignal::new(Vec::<String>::new());
    let audio_url = book.audio_sample.as_deref().and_then(get_book_cover_url);
    let has_audio = audio_url.is_some();
    let read_sample = book.read_sample.clone();

    let open_sample = move || open_read_sample(ctx, read_sample.as_deref(), sample_pages, set_sample_open);

    let cart_title = title.clone();
    let wishlist_title = title.clone();
    let subject = ReviewSubject::Book(book.book_id);

    view! {
        <ProductDetailLayout
            product=details
            on_add_to_cart=move |quantity: u32| {
                ctx.toast(
                    ToastKind::Success,
                    Some("Đã thêm vào giỏ hàng"),
                    format!("{} x {}", quantity, cart_title),
                );
            }
            on_add_to_wishlist=move |_| {
                ctx.toast(ToastKind::Success, Some("Đã thêm vào yêu thích"), wishlist_title.clone());
            }
            on_image_click=move |_| {
                if has_gallery {
                    set_viewer_open.set(true);
                }
            }
            show_breadcrumb=true
            extra_sections=move || view! {
                <ReviewSection subject=subject />
                <div class="back-link">
                    <A href="/books">"← Về Trang Mua Sắm"</A>
                </div>
            }
        >
            <button class="btn btn-outline" on:click=move |_| open_sample()>
                "Đọc thử"
            </button>
            <button
                class="btn btn-outline"
                on:click=move |_| {
                    if has_audio {
                        set_audio_open.set(true);
                    } else {
                        ctx.toast(ToastKind::Info, Some("Nghe thử"), "Sách này chưa có audio nghe thử");
                    }
                }
            >
                "Nghe thử"
            </button>
        </ProductDetailLayout>

        <ImageViewerModal
            open=viewer_open
            on_close=move |_| set_viewer_open.set(false)
            images=Signal::stored(gallery)
            title=title.clone()
        />
        <ReadSampleModal
            open=sample_open
            on_close=move |_| set_sample_open.set(false)
            pages=sample_pages
            book_title=title.clone()
        />
        <AudioSampleModal
            open=audio_open
            on_close=move |_| set_audio_open.set(false)
            audio_url=Signal::stored(audio_url)
            book_title=title
        />
    }
}

/// Parse the sample page list and open the viewer, or explain why not
fn open_read_sample(
    ctx: AppContext,
    raw: Option<&str>,
    pages: RwSignal<Vec<String>>,
    set_open: WriteSignal<bool>,
) {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        ctx.toast(ToastKind::Info, Some("Đọc thử"), "Sách này chưa có trang đọc thử");
        return;
    };
    match parse_sample_pages(raw) {
        Ok(paths) if !paths.is_empty() => {
            pages.set(media_urls(paths.iter().map(String::as_str)));
            set_open.set(true);
        }
        Ok(_) => ctx.toast(ToastKind::Info, Some("Đọc thử"), "Không có trang đọc thử cho sách này"),
        Err(e) => {
            log::warn!("[BOOK] Malformed read_sample: {}", e);
            ctx.toast(ToastKind::Error, Some("Đọc thử"), "Không thể tải trang đọc thử");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_details_without_discount() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "book_id": 9,
            "title": "Dế Mèn",
            "isbn": "",
            "price": 120000,
            "stock_quantity": 0,
            "quantity": 5,
            "authors": [{"author_id": 1, "name": "Tô Hoài"}],
            "publication_date": "2020-03-15",
            "is_new": true
        }))
        .unwrap();
        let details = book_details(&book);
        assert_eq!(details.price_text, "120.000₫");
        assert_eq!(details.discount_price_text, None);
        assert_eq!(details.isbn_text, None);
        assert_eq!(details.author_text.as_deref(), Some("Tô Hoài"));
        assert_eq!(details.publish_date_text.as_deref(), Some("15/03/2020"));
        assert_eq!(details.badges, vec!["New".to_string()]);
        assert_eq!(details.stock, 5);
        assert!(details.images.is_empty());
    }

    #[test]
    fn test_book_details_gallery_skips_empty_paths() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "book_id": 2,
            "title": "Tắt đèn",
            "price": 80000,
            "image_url": "covers/tat-den.jpg",
            "image2_url": "",
            "image3_url": null
        }))
        .unwrap();
        let details = book_details(&book);
        assert_eq!(details.images.len(), 1);
        assert!(details.images[0].ends_with("/static/covers/tat-den.jpg"));
    }
}
