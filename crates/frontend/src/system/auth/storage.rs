use crate::shared::config::config;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn session_key() -> &'static str {
    &config().session.storage_key
}

/// Save session token to localStorage
pub fn save_session_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(session_key(), token).is_err() {
            log::warn!("could not persist session token");
        }
    }
}

/// Get session token from localStorage
pub fn get_session_token() -> Option<String> {
    get_local_storage()?
        .get_item(session_key())
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Remove the session token
pub fn clear_session_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(session_key());
    }
}

/// `Authorization` header value for the stored session
pub fn bearer_header() -> String {
    format!("Bearer {}", get_session_token().unwrap_or_default())
}
