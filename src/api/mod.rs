//! Backend API
//!
//! Frontend bindings to the bookstore REST API, organized by domain.

mod addresses;
mod books;
mod client;
mod error;
mod moderation;
mod responses;
mod stationery;
mod users;

// Re-export all public items
pub use addresses::*;
pub use books::*;
pub use client::encode_segment;
pub use error::*;
pub use moderation::*;
pub use responses::*;
pub use stationery::*;
pub use users::*;
