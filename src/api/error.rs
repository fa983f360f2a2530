//! API Errors

use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is extracted from the body
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Request never produced a response
    #[error("{0}")]
    Network(String),
    /// Response body did not match the expected shape
    #[error("Phản hồi không hợp lệ: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Message for a failed response: `detail`, then `message`, then the status
pub fn error_message(status: u16, body: &Value) -> String {
    if let Some(detail) = body.get("detail") {
        match detail {
            Value::String(s) if !s.is_empty() => return s.clone(),
            // Validation errors arrive as a list of `{msg, loc}` objects
            Value::Array(items) if !items.is_empty() => {
                let joined = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return joined;
                }
            }
            _ => {}
        }
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        if !message.is_empty() {
            return message.to_string();
        }
    }
    format!("HTTP Error: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_preferred() {
        let body = json!({"detail": "Không tìm thấy sách", "message": "other"});
        assert_eq!(error_message(404, &body), "Không tìm thấy sách");
    }

    #[test]
    fn test_message_fallback() {
        assert_eq!(error_message(400, &json!({"message": "Sai dữ liệu"})), "Sai dữ liệu");
        assert_eq!(error_message(400, &json!({"detail": ""})), "HTTP Error: 400");
    }

    #[test]
    fn test_status_fallback() {
        assert_eq!(error_message(500, &Value::Null), "HTTP Error: 500");
        assert_eq!(error_message(502, &json!("Bad gateway")), "HTTP Error: 502");
    }

    #[test]
    fn test_validation_detail_list() {
        let body = json!({"detail": [{"msg": "field required", "loc": ["body", "city"]}]});
        assert_eq!(error_message(422, &body), "field required");
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Http { status: 401, message: "x".into() };
        assert!(err.is_unauthorized());
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(err.to_string(), "x");
    }
}
