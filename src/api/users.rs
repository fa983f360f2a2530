//! User Endpoints

use super::client::{send_json, Verb};
use super::error::ApiError;
use crate::models::{ProfileUpdate, UserProfile};

pub async fn update_user_profile(data: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    send_json(Verb::Put, "/users/profile", data).await
}
