use contracts::system::auth::{LoginRequest, SessionInfo, SessionResponse, SignupRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, status_error};

/// Create a session with email and password
pub async fn login(email: String, password: String) -> Result<SessionResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/api/sessions", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(status_error("Login", response.status()));
    }

    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new account; the response already carries a session
pub async fn signup(request: SignupRequest) -> Result<SessionResponse, String> {
    let response = Request::post(&format!("{}/api/users/signup", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(status_error("Signup", response.status()));
    }

    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Look up a session. `Ok(None)` when the token is unknown or expired.
pub async fn get_session(token: &str) -> Result<Option<SessionInfo>, String> {
    let response = Request::get(&format!(
        "{}/api/sessions/{}",
        api_base(),
        urlencoding::encode(token)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        404 | 401 | 410 => return Ok(None),
        _ if !response.ok() => return Err(status_error("Session lookup", response.status())),
        _ => {}
    }

    response
        .json::<SessionInfo>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a session on the server
pub async fn delete_session(token: &str) -> Result<(), String> {
    let response = Request::delete(&format!(
        "{}/api/sessions/{}",
        api_base(),
        urlencoding::encode(token)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() && response.status() != 404 {
        return Err(status_error("Logout", response.status()));
    }

    Ok(())
}
