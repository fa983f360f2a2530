//! Product Detail Layout Component
//!
//! Shared shell for a purchasable item. Receives display-ready strings and
//! only owns the selected gallery image and the quantity stepper.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::currency::discount_percent;
use crate::quantity::QuantityStepper;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x450/008080/ffffff?text=No+Image";

/// Display values for one product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetails {
    pub title: String,
    /// Full image URLs; empty entries are skipped
    pub images: Vec<String>,
    pub price_text: String,
    pub old_price_text: Option<String>,
    pub discount_price_text: Option<String>,
    pub stock: u32,
    pub categories: Vec<String>,
    pub brief_description: Option<String>,
    pub full_description: Option<String>,
    pub badges: Vec<String>,
    pub author_text: Option<String>,
    pub isbn_text: Option<String>,
    pub sku_text: Option<String>,
    pub publish_date_text: Option<String>,
    /// Breadcrumb parent as `(href, label)`
    pub back_link: (String, String),
}

/// Non-empty gallery images in order
pub fn gallery_images(images: &[String]) -> Vec<String> {
    images.iter().filter(|src| !src.is_empty()).cloned().collect()
}

/// Discount badge text, e.g. `-25%`
pub fn discount_badge(details: &ProductDetails) -> Option<String> {
    let old = details.old_price_text.as_deref()?;
    let discounted = details.discount_price_text.as_deref()?;
    discount_percent(old, discounted).map(|pct| format!("-{pct}%"))
}

pub fn add_to_cart_label(quantity: u32) -> String {
    if quantity > 1 {
        format!("Thêm {quantity} vào giỏ hàng")
    } else {
        "Thêm vào giỏ hàng".to_string()
    }
}

#[component]
pub fn ProductDetailLayout(
    product: ProductDetails,
    #[prop(into)] on_add_to_cart: Callback<u32>,
    #[prop(optional, into)] on_add_to_wishlist: Option<Callback<()>>,
    /// Open the full-size viewer at an image index
    #[prop(optional, into)]
    on_image_click: Option<Callback<usize>>,
    #[prop(optional)] show_breadcrumb: bool,
    #[prop(optional, into)] extra_sections: ViewFn,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let images = gallery_images(&product.images);
    let selected = RwSignal::new(0usize);
    let stepper = RwSignal::new(QuantityStepper::new(product.stock));
    let in_stock = product.stock > 0;
    let discount = discount_badge(&product);

    let main_image = {
        let images = images.clone();
        move || {
            images
                .get(selected.get())
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
        }
    };

    let ProductDetails {
        title,
        price_text,
        old_price_text,
        discount_price_text,
        stock,
        categories,
        brief_description,
        full_description,
        badges,
        author_text,
        isbn_text,
        sku_text,
        publish_date_text,
        back_link,
        ..
    } = product;

    let breadcrumb = show_breadcrumb.then(|| {
        let (href, label) = back_link;
        view! {
            <nav class="breadcrumb">
                <A href="/">"Trang Chủ"</A>
                <span>"›"</span>
                <A href=href>{label}</A>
                <span>"›"</span>
                <span class="breadcrumb-current">{title.clone()}</span>
            </nav>
        }
    });

    let thumbnails = (images.len() > 1).then(|| {
        let title = title.clone();
        view! {
            <div class="gallery-thumbs">
                {images
                    .iter()
                    .enumerate()
                    .map(|(idx, src)| {
                        view! {
                            <button
                                class="gallery-thumb"
                                class:selected=move || selected.get() == idx
                                on:click=move |_| selected.set(idx)
                            >
                                <img src=src.clone() alt=format!("{} {}", title, idx + 1) />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let price = match discount_price_text {
        Some(discounted) => view! {
            <div class="price-row">
                <span class="price-discounted">{discounted}</span>
                <span class="price-old">{old_price_text.unwrap_or_default()}</span>
            </div>
        }
        .into_any(),
        None => view! { <span class="price-regular">{price_text}</span> }.into_any(),
    };

    let chips = (!categories.is_empty() || isbn_text.is_some() || sku_text.is_some()).then(|| {
        view! {
            <div class="product-chips">
                {categories
                    .into_iter()
                    .map(|name| view! { <span class="chip">{name}</span> })
                    .collect_view()}
                {isbn_text.map(|code| view! { <span class="chip">{format!("Mã: {code}")}</span> })}
                {sku_text.map(|code| view! { <span class="chip">{format!("Mã: {code}")}</span> })}
            </div>
        }
    });

    view! {
        <div class="product-page">
            {breadcrumb}

            <div class="product-main">
                <div class="product-gallery">
                    <div
                        class="gallery-main"
                        on:click=move |_| {
                            if let Some(cb) = on_image_click {
                                cb.run(selected.get_untracked());
                            }
                        }
                    >
                        <img src=main_image alt=title.clone() />
                        {badges.first().cloned().map(|b| view! { <div class="badge">{b}</div> })}
                        {discount.map(|d| view! { <div class="discount-badge">{d}</div> })}
                    </div>
                    {thumbnails}
                </div>

                <div class="product-info">
                    <div class="product-title-row">
                        <div>
                            <h1>{title.clone()}</h1>
                            {author_text.map(|a| view! {
                                <div class="product-author"><strong>"Tác giả:"</strong>" "{a}</div>
                            })}
                        </div>
                        {children.map(|c| view! { <div class="product-actions-extra">{c()}</div> })}
                    </div>

                    <div class="price-stock">
                        <div>{price}</div>
                        <div class="stock">
                            <p class="stock-label">"Hàng trong kho"</p>
                            <p class="stock-value">{format!("Còn lại: {stock}")}</p>
                        </div>
                    </div>

                    {chips}

                    {publish_date_text.map(|d| view! {
                        <div class="product-publish-date">
                            <span class="label">"Ngày xuất bản:"</span>" "{d}
                        </div>
                    })}

                    {brief_description.map(|html| view! {
                        <div class="product-brief">
                            <span class="label">"Tóm Tắt:"</span>
                            <div class="prose" inner_html=html></div>
                        </div>
                    })}

                    <div class="purchase">
                        <div class="quantity-row">
                            <span class="label">"Số Lượng:"</span>
                            <div class="quantity-stepper">
                                <button
                                    disabled=move || !stepper.with(QuantityStepper::can_decrement)
                                    on:click=move |_| stepper.update(QuantityStepper::decrement)
                                >
                                    "−"
                                </button>
                                <input
                                    type="number"
                                    min="1"
                                    max=move || stepper.with(QuantityStepper::max).to_string()
                                    disabled=!in_stock
                                    prop:value=move || stepper.with(QuantityStepper::value).to_string()
                                    on:change=move |ev| {
                                        let text = event_target_value(&ev);
                                        stepper.update(|s| s.set_from_input(&text));
                                    }
                                />
                                <button
                                    disabled=move || !stepper.with(QuantityStepper::can_increment)
                                    on:click=move |_| stepper.update(QuantityStepper::increment)
                                >
                                    "+"
                                </button>
                            </div>
                        </div>
                        <div class="purchase-actions">
                            <button
                                class="btn btn-primary"
                                disabled=!in_stock
                                on:click=move |_| on_add_to_cart.run(stepper.with_untracked(QuantityStepper::value))
                            >
                                {move || add_to_cart_label(stepper.with(QuantityStepper::value))}
                            </button>
                            {on_add_to_wishlist.map(|cb| view! {
                                <button class="btn btn-outline" on:click=move |_| cb.run(())>
                                    "Thêm vào Yêu Thích"
                                </button>
                            })}
                        </div>
                    </div>
                </div>
            </div>

            <div class="product-description">
                <h2>"Mô Tả Chi Tiết"</h2>
                {match full_description {
                    Some(html) => view! { <div class="prose" inner_html=html></div> }.into_any(),
                    None => view! { <p class="muted">"Chưa có mô tả chi tiết."</p> }.into_any(),
                }}
            </div>

            {extra_sections.run()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_skips_empty() {
        let images = vec!["".to_string(), "a.jpg".to_string(), "".to_string(), "b.jpg".to_string()];
        assert_eq!(gallery_images(&images), vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert!(gallery_images(&[]).is_empty());
    }

    #[test]
    fn test_discount_badge() {
        let mut details = ProductDetails {
            old_price_text: Some("200.000₫".into()),
            discount_price_text: Some("150.000₫".into()),
            ..Default::default()
        };
        assert_eq!(discount_badge(&details).as_deref(), Some("-25%"));
        details.discount_price_text = None;
        assert_eq!(discount_badge(&details), None);
    }

    #[test]
    fn test_add_to_cart_label() {
        assert_eq!(add_to_cart_label(1), "Thêm vào giỏ hàng");
        assert_eq!(add_to_cart_label(4), "Thêm 4 vào giỏ hàng");
    }
}
