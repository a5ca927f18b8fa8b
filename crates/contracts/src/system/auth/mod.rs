use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub school_name: Option<String>,
}

/// Ответ на login/signup: токен сессии и пользователь
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Ответ `GET /api/sessions/{token}` для действующей сессии
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user: UserInfo,
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
