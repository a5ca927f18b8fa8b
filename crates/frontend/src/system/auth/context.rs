use contracts::system::auth::{SessionResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// A stored token is being checked against the session service
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored_token = storage::get_session_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored_token.is_some(),
        ..Default::default()
    });

    // Try to restore session from localStorage on mount
    if let Some(token) = stored_token {
        spawn_local(async move {
            match api::get_session(&token).await {
                Ok(Some(info)) => {
                    log::info!("session restored for {}", info.user.email);
                    set_auth_state.set(AuthState {
                        token: Some(token),
                        user: Some(info.user),
                        restoring: false,
                    });
                }
                Ok(None) => {
                    log::info!("stored session is no longer valid");
                    storage::clear_session_token();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_session_token();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a freshly created session and mark the user as signed in
pub fn start_session(set_auth_state: WriteSignal<AuthState>, response: SessionResponse) {
    storage::save_session_token(&response.token);
    set_auth_state.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
        restoring: false,
    });
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_session_token() {
        if let Err(e) = api::delete_session(&token).await {
            log::warn!("{}", e);
        }
    }

    storage::clear_session_token();
    set_auth_state.set(AuthState::default());
}
