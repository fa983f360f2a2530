//! Moderation Endpoint

use super::client::{send_json, Verb};
use super::error::ApiError;
use crate::models::{ModerationRequest, ModerationVerdict};

pub async fn moderate_review(request: &ModerationRequest) -> Result<ModerationVerdict, ApiError> {
    send_json(Verb::Post, "/moderation/review", request).await
}
