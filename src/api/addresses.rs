//! Address Endpoints

use serde::Serialize;

use super::client::{get_json, send_json, send_value, Verb};
use super::error::ApiError;
use crate::models::{Address, AddressList};

// ========================
// Argument Structs
// ========================

/// Create/update body
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AddressData {
    pub phone_number: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub is_default_shipping: bool,
}

// ========================
// Commands
// ========================

pub async fn get_addresses() -> Result<AddressList, ApiError> {
    get_json("/addresses").await
}

pub async fn create_address(data: &AddressData) -> Result<Address, ApiError> {
    send_json(Verb::Post, "/addresses", data).await
}

pub async fn update_address(address_id: i64, data: &AddressData) -> Result<Address, ApiError> {
    send_json(Verb::Put, &format!("/addresses/{address_id}"), data).await
}

pub async fn delete_address(address_id: i64) -> Result<(), ApiError> {
    send_value::<()>(Verb::Delete, &format!("/addresses/{address_id}"), None).await?;
    Ok(())
}

pub async fn set_default_address(address_id: i64) -> Result<(), ApiError> {
    send_value::<()>(Verb::Post, &format!("/addresses/{address_id}/set-default"), None).await?;
    Ok(())
}
