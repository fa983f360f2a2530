//! Stationery Endpoints

use super::client::{encode_segment, get_json, send_value, Verb};
use super::error::ApiError;
use super::responses::{CreateReviewResponse, ReviewListResponse};
use crate::models::{Review, ReviewPayload, StationeryItem};

pub async fn get_stationery_item(stationery_id: i64) -> Result<StationeryItem, ApiError> {
    get_json(&format!("/stationery/{stationery_id}")).await
}

pub async fn get_stationery_by_slug(slug: &str) -> Result<StationeryItem, ApiError> {
    get_json(&format!("/stationery/slug/{}", encode_segment(slug))).await
}

/// Reviews of a stationery item. Listing may require login (401).
pub async fn get_stationery_reviews(stationery_id: i64) -> Result<Vec<Review>, ApiError> {
    let response: ReviewListResponse =
        get_json(&format!("/stationery/{stationery_id}/reviews")).await?;
    Ok(response.into_vec())
}

pub async fn create_stationery_review(
    stationery_id: i64,
    payload: &ReviewPayload,
) -> Result<CreateReviewResponse, ApiError> {
    let path = format!("/stationery/{stationery_id}/reviews");
    let value = send_value(Verb::Post, &path, Some(payload)).await?;
    Ok(CreateReviewResponse::from_value(value))
}
