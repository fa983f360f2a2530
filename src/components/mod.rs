//! UI Components
//!
//! Reusable Leptos components.

mod address_card;
mod address_form;
mod address_modal;
mod audio_sample_modal;
mod confirm_dialog;
mod delete_confirm_button;
mod hooks;
mod image_viewer_modal;
mod modal;
mod paged_image_viewer;
mod product_detail_layout;
mod read_sample_modal;
mod review_section;
mod star_rating;
mod toast_host;

pub use address_card::AddressCard;
pub use address_form::AddressForm;
pub use address_modal::AddressModal;
pub use audio_sample_modal::AudioSampleModal;
pub use confirm_dialog::ConfirmDialog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use hooks::{use_modal_keys, use_scroll_lock};
pub use image_viewer_modal::ImageViewerModal;
pub use modal::Modal;
pub use paged_image_viewer::PagedImageViewer;
pub use product_detail_layout::{ProductDetailLayout, ProductDetails};
pub use read_sample_modal::ReadSampleModal;
pub use review_section::ReviewSection;
pub use star_rating::{StarDisplay, StarRatingInput};
pub use toast_host::ToastHost;
