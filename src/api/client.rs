//! HTTP Client
//!
//! Thin `gloo-net` wrapper: URL building, bearer auth, error extraction.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{error_message, ApiError};
use crate::config::api_config;
use crate::session;

/// Characters left unescaped in a path segment (same set as `encodeURIComponent`)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a slug for use as one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = api_config().api_url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");

    match session::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn send(verb: Verb, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let builder = builder(verb, path);
    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| {
        log::warn!("[API] {:?} {} failed: {}", verb, path, e);
        ApiError::Network(e.to_string())
    })?;

    if resp.ok() {
        return Ok(resp);
    }

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let data = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);
    let message = error_message(status, &data);
    log::warn!("[API] {:?} {} -> {}: {}", verb, path, status, message);
    Err(ApiError::Http { status, message })
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Typed Requests
// ========================

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = send(Verb::Get, path, None).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = send(verb, path, Some(encode_body(body)?)).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and read the body loosely: empty or non-JSON bodies become `Null`
pub(crate) async fn send_value<B: Serialize>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<Value, ApiError> {
    let body = body.map(encode_body).transpose()?;
    let resp = send(verb, path, body).await?;
    let text = resp.text().await.unwrap_or_default();
    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("dac-nhan-tam"), "dac-nhan-tam");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("sách"), "s%C3%A1ch");
        assert_eq!(encode_segment("it's(1)"), "it's(1)");
    }
}
