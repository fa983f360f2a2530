//! Response Shapes
//!
//! Endpoints that answer in more than one shape. Variants are tried in
//! declaration order.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Review, ReviewPayload};

/// Body of a create-review response
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateReviewResponse {
    Wrapped { review: Review },
    Bare(Review),
    Other(Value),
}

impl CreateReviewResponse {
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Self::Other(value))
    }

    /// Record to show locally. Falls back to the submitted payload; rating,
    /// comment and timestamp always come from the client.
    pub fn into_review(self, payload: &ReviewPayload, created_at: String) -> Review {
        let mut review = match self {
            Self::Wrapped { review } | Self::Bare(review) => review,
            Self::Other(_) => Review {
                review_id: None,
                rating: payload.rating,
                comment: None,
                created_at: None,
                user_name: None,
                user: None,
            },
        };
        review.rating = payload.rating;
        review.comment = Some(payload.comment.clone());
        review.created_at = Some(created_at);
        review
    }
}

/// Body of a review list response
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReviewListResponse {
    List(Vec<Review>),
    Items { items: Vec<Review> },
    Data { data: Vec<Review> },
    Other(Value),
}

impl ReviewListResponse {
    pub fn into_vec(self) -> Vec<Review> {
        match self {
            Self::List(reviews) | Self::Items { items: reviews } | Self::Data { data: reviews } => {
                reviews
            }
            Self::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> ReviewPayload {
        ReviewPayload { rating: 4, comment: "Sách hay".into() }
    }

    #[test]
    fn test_wrapped_review_preferred() {
        let value = json!({"review": {"review_id": 9, "rating": 1, "user": {"name": "Minh"}}});
        let review = CreateReviewResponse::from_value(value).into_review(&payload(), "now".into());
        assert_eq!(review.review_id, Some(9));
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment.as_deref(), Some("Sách hay"));
        assert_eq!(review.created_at.as_deref(), Some("now"));
        assert_eq!(review.author_name(), "Minh");
    }

    #[test]
    fn test_bare_review() {
        let value = json!({"review_id": 3, "rating": 5, "user_name": "Hà"});
        let response = CreateReviewResponse::from_value(value);
        assert!(matches!(response, CreateReviewResponse::Bare(_)));
        let review = response.into_review(&payload(), "now".into());
        assert_eq!(review.review_id, Some(3));
        assert_eq!(review.author_name(), "Hà");
    }

    #[test]
    fn test_unrecognised_body_echoes_payload() {
        for value in [json!({"ok": true}), Value::Null] {
            let review = CreateReviewResponse::from_value(value).into_review(&payload(), "now".into());
            assert_eq!(review.review_id, None);
            assert_eq!(review.rating, 4);
            assert_eq!(review.comment.as_deref(), Some("Sách hay"));
        }
    }

    #[test]
    fn test_review_list_shapes() {
        let one = json!([{"rating": 5}]);
        let items = json!({"items": [{"rating": 4}, {"rating": 3}]});
        let data = json!({"data": [{"rating": 2}]});
        let parse = |v: Value| serde_json::from_value::<ReviewListResponse>(v).unwrap().into_vec();
        assert_eq!(parse(one).len(), 1);
        assert_eq!(parse(items).len(), 2);
        assert_eq!(parse(data)[0].rating, 2);
        assert!(parse(json!({"total": 0})).is_empty());
    }
}
