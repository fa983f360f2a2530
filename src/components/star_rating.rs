//! Star Rating Components
//!
//! Clickable 1-5 star input and a read-only star row.

use leptos::prelude::*;

const STARS: [u8; 5] = [1, 2, 3, 4, 5];

/// Whether star `star` is lit for a rating (hover takes precedence)
pub fn star_lit(star: u8, rating: u8, hover: u8) -> bool {
    let shown = if hover > 0 { hover } else { rating };
    shown >= star
}

#[component]
pub fn StarRatingInput(rating: RwSignal<u8>) -> impl IntoView {
    let hover = RwSignal::new(0u8);

    view! {
        <div class="star-input">
            {STARS
                .iter()
                .map(|&star| {
                    view! {
                        <button
                            type="button"
                            class="star-btn"
                            class:lit=move || star_lit(star, rating.get(), hover.get())
                            aria-label=format!("Chọn {star} sao")
                            on:mouseenter=move |_| hover.set(star)
                            on:mouseleave=move |_| hover.set(0)
                            on:click=move |_| rating.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn StarDisplay(rating: u8) -> impl IntoView {
    view! {
        <span class="star-display" aria-label=format!("{rating}/5")>
            {STARS
                .iter()
                .map(|&star| {
                    let class = if rating >= star { "star lit" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_overrides_rating() {
        assert!(star_lit(3, 3, 0));
        assert!(!star_lit(4, 3, 0));
        assert!(star_lit(5, 2, 5));
        assert!(!star_lit(3, 5, 2));
    }
}
