//! Book Endpoints

use super::client::{encode_segment, get_json, send_value, Verb};
use super::error::ApiError;
use super::responses::{CreateReviewResponse, ReviewListResponse};
use crate::models::{Book, Review, ReviewPayload};

pub async fn get_book(book_id: i64) -> Result<Book, ApiError> {
    get_json(&format!("/books/{book_id}")).await
}

pub async fn get_book_by_slug(slug: &str) -> Result<Book, ApiError> {
    get_json(&format!("/books/slug/{}", encode_segment(slug))).await
}

pub async fn get_book_reviews(book_id: i64) -> Result<Vec<Review>, ApiError> {
    let response: ReviewListResponse = get_json(&format!("/books/{book_id}/reviews")).await?;
    Ok(response.into_vec())
}

pub async fn create_review(
    book_id: i64,
    payload: &ReviewPayload,
) -> Result<CreateReviewResponse, ApiError> {
    let value = send_value(Verb::Post, &format!("/books/{book_id}/reviews"), Some(payload)).await?;
    Ok(CreateReviewResponse::from_value(value))
}
