//! Pages
//!
//! Routed views. Each page fetches its own data on mount.

mod book;
mod not_found;
mod profile;
mod stationery;

pub use book::BookDetailsPage;
pub use not_found::NotFoundPage;
use not_found::{ItemNotFound, PageLoading};
pub use profile::ProfilePage;
pub use stationery::StationeryDetailsPage;

use crate::config::get_book_cover_url;

/// Resolve stored media paths to full URLs, dropping empties
fn media_urls<'a>(paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    paths.into_iter().filter_map(get_book_cover_url).collect()
}
