//! Stationery Details Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{media_urls, ItemNotFound, PageLoading};
use crate::api::{self, ApiError};
use crate::components::{ImageViewerModal, ProductDetailLayout, ProductDetails, ReviewSection};
use crate::context::use_app_context;
use crate::currency::format_price;
use crate::models::{ProductKey, StationeryItem};
use crate::review::ReviewSubject;
use crate::toast::ToastKind;

async fn fetch_item(key: ProductKey) -> Result<StationeryItem, ApiError> {
    match key {
        ProductKey::Id(id) => api::get_stationery_item(id).await,
        ProductKey::Slug(slug) => api::get_stationery_by_slug(&slug).await,
    }
}

fn stationery_details(item: &StationeryItem) -> ProductDetails {
    ProductDetails {
        title: item.title.clone(),
        images: media_urls(item.image_paths()),
        price_text: format_price(item.discounted_price.unwrap_or(item.price)),
        old_price_text: Some(format_price(item.price)),
        discount_price_text: item.discounted_price.map(format_price),
        stock: item.stock(),
        categories: item.categories.iter().map(|c| c.name.clone()).collect(),
        brief_description: item.brief_description.clone(),
        full_description: item.full_description.clone(),
        badges: item.badges(),
        sku_text: item.sku.clone().filter(|s| !s.is_empty()),
        back_link: ("/stationery".to_string(), "Văn phòng phẩm".to_string()),
        ..Default::default()
    }
}

#[component]
pub fn StationeryDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let (item, set_item) = signal(None::<StationeryItem>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let param = params.with(|p| p.get("slug").unwrap_or_default());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_item(ProductKey::parse(&param)).await {
                Ok(loaded) => set_item.set(Some(loaded)),
                Err(e) => {
                    log::warn!("[STATIONERY] Failed to load {}: {}", param, e);
                    set_item.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <PageLoading message="Đang tải thông tin sản phẩm..." /> }.into_any();
            }
            match item.get() {
                Some(item) => view! { <StationeryDetails item=item /> }.into_any(),
                None => view! {
                    <ItemNotFound
                        heading="Không tìm thấy sản phẩm"
                        message=error.get().unwrap_or_else(|| "Sản phẩm bạn tìm không tồn tại.".to_string())
                        back_href="/stationery"
                        back_label="Xem tất cả văn phòng phẩm"
                    />
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn StationeryDetails(item: StationeryItem) -> impl IntoView {
    let ctx = use_app_context();
    let details = stationery_details(&item);
    let gallery = details.images.clone();
    let has_gallery = !gallery.is_empty();
    let title = item.title.clone();
    let (viewer_open, set_viewer_open) = signal(false);
    let subject = ReviewSubject::Stationery(item.stationery_id);

    let cart_title = title.clone();
    let wishlist_title = title.clone();

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
                    <A href="/stationery">"← Về Trang Văn Phòng Phẩm"</A>
                </div>
            }
        />

        <ImageViewerModal
            open=viewer_open
            on_close=move |_| set_viewer_open.set(false)
            images=Signal::stored(gallery)
            title=title
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationery_details_prices() {
        let item: StationeryItem = serde_json::from_value(serde_json::json!({
            "stationery_id": 3,
            "title": "Bút bi",
            "sku": "BB-01",
            "price": 20000,
            "discounted_price": 15000,
            "stock_quantity": 4
        }))
        .unwrap();
        let details = stationery_details(&item);
        assert_eq!(details.price_text, "15.000₫");
        assert_eq!(details.discount_price_text.as_deref(), Some("15.000₫"));
        assert_eq!(details.old_price_text.as_deref(), Some("20.000₫"));
        assert_eq!(details.sku_text.as_deref(), Some("BB-01"));
        assert_eq!(details.isbn_text, None);
        assert_eq!(details.stock, 4);
    }
}
