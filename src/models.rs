//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub author_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

/// Book data structure (matches backend `BookResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub discounted_price: Option<i64>,
    #[serde(default)]
    pub stock_quantity: i64,
    /// Some endpoints report stock under this name instead
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image2_url: Option<String>,
    #[serde(default)]
    pub image3_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brief_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    /// JSON-encoded array of sample page paths
    #[serde(default)]
    pub read_sample: Option<String>,
    #[serde(default)]
    pub audio_sample: Option<String>,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_new: bool,
}

impl Book {
    /// Units available, preferring the `quantity` field when it is positive
    pub fn stock(&self) -> u32 {
        let raw = self.quantity.filter(|q| *q > 0).unwrap_or(self.stock_quantity);
        u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
    }

    /// Non-empty image paths in display order
    pub fn image_paths(&self) -> Vec<&str> {
        image_paths([&self.image_url, &self.image2_url, &self.image3_url])
    }

    /// Comma-joined author names, if any
    pub fn author_names(&self) -> Option<String> {
        if self.authors.is_empty() {
            return None;
        }
        Some(self.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", "))
    }

    pub fn badges(&self) -> Vec<String> {
        badges(self.is_best_seller, self.is_new)
    }
}

/// Sample page paths from the JSON-encoded `read_sample` field
pub fn parse_sample_pages(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let pages: Vec<String> = serde_json::from_str(raw)?;
    Ok(pages.into_iter().filter(|p| !p.trim().is_empty()).collect())
}

/// Stationery data structure (matches backend `StationeryResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationeryItem {
    pub stationery_id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub discounted_price: Option<i64>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image2_url: Option<String>,
    #[serde(default)]
    pub image3_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brief_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_new: bool,
}

impl StationeryItem {
    pub fn stock(&self) -> u32 {
        u32::try_from(self.stock_quantity.max(0)).unwrap_or(u32::MAX)
    }

    pub fn image_paths(&self) -> Vec<&str> {
        image_paths([&self.image_url, &self.image2_url, &self.image3_url])
    }

    pub fn badges(&self) -> Vec<String> {
        badges(self.is_best_seller, self.is_new)
    }
}

fn image_paths<'a>(slots: [&'a Option<String>; 3]) -> Vec<&'a str> {
    slots
        .into_iter()
        .filter_map(|slot| slot.as_deref())
        .filter(|path| !path.is_empty())
        .collect()
}

fn badges(is_best_seller: bool, is_new: bool) -> Vec<String> {
    if is_best_seller {
        vec!["Bestseller".to_string()]
    } else if is_new {
        vec!["New".to_string()]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewUser {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
}

/// Review data structure (book and stationery reviews share the shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub review_id: Option<i64>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

impl Review {
    /// Display name of the reviewer
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .or_else(|| self.user_name.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or("Người dùng")
    }
}

/// Mean rating of a review list, `None` when empty
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(total) / reviews.len() as f64)
}

/// Body of a create-review request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub rating: u8,
    pub comment: String,
}

/// Body of a moderation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationRequest {
    pub text: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stationery_id: Option<i64>,
    pub language: String,
}

/// Moderation result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModerationVerdict {
    pub approved: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// Saved address (matches backend `AddressResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address_id: i64,
    pub phone_number: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default_shipping: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AddressList {
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub default_address_id: Option<i64>,
}

/// Logged-in user as stored by the auth flow and returned by the profile API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            full.to_string()
        }
    }
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(user: &UserProfile) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
        }
    }
}

/// How a product route parameter addresses the entity
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKey {
    Id(i64),
    Slug(String),
}

impl ProductKey {
    /// Canonical integers select the id endpoint, anything else is a slug
    pub fn parse(param: &str) -> Self {
        match param.parse::<i64>() {
            Ok(id) if id.to_string() == param => Self::Id(id),
            _ => Self::Slug(param.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_review(rating: u8) -> Review {
        Review {
            review_id: None,
            rating,
            comment: None,
            created_at: None,
            user_name: None,
            user: None,
        }
    }

    #[test]
    fn test_product_key_parse() {
        assert_eq!(ProductKey::parse("42"), ProductKey::Id(42));
        assert_eq!(ProductKey::parse("042"), ProductKey::Slug("042".into()));
        assert_eq!(ProductKey::parse("dac-nhan-tam"), ProductKey::Slug("dac-nhan-tam".into()));
        assert_eq!(ProductKey::parse("12abc"), ProductKey::Slug("12abc".into()));
    }

    #[test]
    fn test_book_stock_prefers_positive_quantity() {
        let mut book: Book = serde_json::from_value(serde_json::json!({
            "book_id": 1, "title": "T", "price": 1000, "stock_quantity": 4
        }))
        .unwrap();
        assert_eq!(book.stock(), 4);
        book.quantity = Some(9);
        assert_eq!(book.stock(), 9);
        book.quantity = Some(0);
        assert_eq!(book.stock(), 4);
        book.stock_quantity = -3;
        assert_eq!(book.stock(), 0);
    }

    #[test]
    fn test_book_images_and_authors() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "book_id": 1, "title": "T", "price": 1000,
            "image_url": "a.jpg", "image2_url": "", "image3_url": "c.jpg",
            "authors": [{"author_id": 1, "name": "Nam Cao"}, {"author_id": 2, "name": "Tô Hoài"}],
            "is_new": true
        }))
        .unwrap();
        assert_eq!(book.image_paths(), vec!["a.jpg", "c.jpg"]);
        assert_eq!(book.author_names().as_deref(), Some("Nam Cao, Tô Hoài"));
        assert_eq!(book.badges(), vec!["New".to_string()]);
    }

    #[test]
    fn test_parse_sample_pages() {
        let pages = parse_sample_pages(r#"["samples/1.jpg", "", "samples/2.jpg"]"#).unwrap();
        assert_eq!(pages, vec!["samples/1.jpg".to_string(), "samples/2.jpg".to_string()]);
        assert!(parse_sample_pages("[]").unwrap().is_empty());
        assert!(parse_sample_pages("samples/1.jpg").is_err());
    }

    #[test]
    fn test_review_author_fallbacks() {
        let mut review = make_review(5);
        assert_eq!(review.author_name(), "Người dùng");
        review.user_name = Some("Lan".into());
        assert_eq!(review.author_name(), "Lan");
        review.user = Some(ReviewUser { user_id: Some(3), name: "Lan Anh".into() });
        assert_eq!(review.author_name(), "Lan Anh");
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), None);
        let reviews = vec![make_review(5), make_review(4), make_review(3)];
        assert_eq!(average_rating(&reviews), Some(4.0));
    }

    #[test]
    fn test_moderation_request_omits_missing_target() {
        let request = ModerationRequest {
            text: "hay".into(),
            rating: 5,
            book_id: Some(7),
            stationery_id: None,
            language: "vi".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["book_id"], 7);
        assert!(json.get("stationery_id").is_none());
    }
}
