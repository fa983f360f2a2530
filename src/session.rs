//! Session Storage
//!
//! Reads the login persisted in `localStorage` by the auth flow and writes
//! profile updates back into it.

use serde_json::{Map, Value};

use crate::models::UserProfile;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

/// Login page served outside this app
pub const LOGIN_PATH: &str = "/login";

/// Logged-in state at page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() || self.token.is_some()
    }
}

// ========================
// Pure Helpers
// ========================

/// Parse the stored user record; malformed JSON reads as logged out
pub fn parse_stored_user(raw: &str) -> Option<UserProfile> {
    match serde_json::from_str::<UserProfile>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("[SESSION] Ignoring malformed stored user: {}", e);
            None
        }
    }
}

/// Bearer token: the direct key wins, else `user.access_token`
pub fn resolve_token(direct: Option<String>, stored_user: Option<&str>) -> Option<String> {
    if let Some(token) = direct.filter(|t| !t.is_empty()) {
        return Some(token);
    }
    let user: Value = serde_json::from_str(stored_user?).ok()?;
    user.get("access_token")?
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Overlay `update` onto the stored user record, keeping unrelated keys
/// such as `access_token`
pub fn merge_user(stored: Option<&str>, update: &UserProfile) -> Value {
    let mut base = stored
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_else(Map::new);

    if let Ok(Value::Object(fields)) = serde_json::to_value(update) {
        for (key, value) in fields {
            if !value.is_null() {
                base.insert(key, value);
            }
        }
    }
    Value::Object(base)
}

// ========================
// Browser Storage
// ========================

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read_key(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

/// Load the persisted session
pub fn load_session() -> Session {
    let raw_user = read_key(USER_KEY);
    Session {
        token: resolve_token(read_key(TOKEN_KEY), raw_user.as_deref()),
        user: raw_user.as_deref().and_then(parse_stored_user),
    }
}

/// Token for the `Authorization` header, read fresh on every request
pub fn auth_token() -> Option<String> {
    resolve_token(read_key(TOKEN_KEY), read_key(USER_KEY).as_deref())
}

/// Write an updated profile back into the stored user record
pub fn persist_user(update: &UserProfile) {
    let Some(storage) = storage() else { return };
    let stored = storage.get_item(USER_KEY).ok().flatten();
    let merged = merge_user(stored.as_deref(), update);
    if storage.set_item(USER_KEY, &merged.to_string()).is_err() {
        log::warn!("[SESSION] Failed to persist user");
    }
}

/// Leave the app for the login page
pub fn redirect_to_login() {
    let Some(window) = web_sys::window() else { return };
    if window.location().set_href(LOGIN_PATH).is_err() {
        log::warn!("[SESSION] Failed to redirect to login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_token_wins() {
        let user = r#"{"access_token":"from-user"}"#;
        assert_eq!(
            resolve_token(Some("direct".into()), Some(user)).as_deref(),
            Some("direct")
        );
        assert_eq!(resolve_token(Some("".into()), Some(user)).as_deref(), Some("from-user"));
        assert_eq!(resolve_token(None, Some("not json")), None);
        assert_eq!(resolve_token(None, None), None);
    }

    #[test]
    fn test_parse_stored_user() {
        let user = parse_stored_user(r#"{"user_id":5,"email":"a@b.vn","access_token":"x"}"#).unwrap();
        assert_eq!(user.user_id, Some(5));
        assert_eq!(user.email.as_deref(), Some("a@b.vn"));
        assert!(parse_stored_user("{broken").is_none());
    }

    #[test]
    fn test_merge_keeps_token() {
        let stored = r#"{"access_token":"tok","first_name":"Old","email":"a@b.vn"}"#;
        let update = UserProfile {
            first_name: Some("Mai".into()),
            phone_number: Some("0901234567".into()),
            ..Default::default()
        };
        let merged = merge_user(Some(stored), &update);
        assert_eq!(merged["access_token"], "tok");
        assert_eq!(merged["first_name"], "Mai");
        assert_eq!(merged["email"], "a@b.vn");
        assert_eq!(merged["phone_number"], "0901234567");
    }

    #[test]
    fn test_session_authenticated() {
        assert!(!Session::default().is_authenticated());
        let session = Session { token: Some("t".into()), user: None };
        assert!(session.is_authenticated());
    }
}
