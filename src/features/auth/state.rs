//! Auth session state and context. The provider restores a stored token once
//! on mount and hydrates the user through `/auth/me`; guards and pages read
//! the derived signals. The token itself only lives in storage.

use crate::{
    app_lib::{AppError, storage},
    features::auth::{
        client,
        types::{AuthResponse, Role, User},
    },
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<User>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub role: Signal<Option<Role>>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<User>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let role = Signal::derive(move || session.get().map(|user| user.role));
        Self {
            session,
            is_loading,
            is_authenticated,
            role,
        }
    }

    /// Persists the token and user, then publishes the user.
    pub fn set_session(&self, token: &str, user: User) -> Result<(), AppError> {
        storage::store_session(token, &user)?;
        self.session.set(Some(user));
        Ok(())
    }

    /// Stores a login or OTP response.
    pub fn accept(&self, response: AuthResponse) -> Result<User, AppError> {
        let token = response.token.as_deref().ok_or_else(|| {
            AppError::Parse("Sign-in response did not include a token.".to_string())
        })?;
        self.set_session(token, response.user.clone())?;
        Ok(response.user)
    }

    /// Stores a registration response only for verified users that came back
    /// with a token; anyone else stays signed out until verification.
    pub fn accept_registration(&self, response: AuthResponse) -> Result<User, AppError> {
        match response.token.as_deref() {
            Some(token) if response.user.is_verified => {
                self.set_session(token, response.user.clone())?;
            }
            _ => self.clear_session(),
        }
        Ok(response.user)
    }

    /// Forgets the session locally; used for logout and failed hydration.
    pub fn clear_session(&self) {
        storage::clear_session();
        self.session.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let has_token = storage::token().is_some();
    // The cached copy fills the navbar while `/auth/me` is in flight.
    let session = RwSignal::new(if has_token { storage::cached_user::<User>() } else { None });
    let is_loading = RwSignal::new(has_token);
    let auth = AuthContext::new(session, is_loading);
    provide_context(auth);

    if has_token {
        spawn_local(async move {
            match client::fetch_me().await {
                Ok(user) => auth.session.set(Some(user)),
                Err(err) => {
                    tracing::info!(error = %err, "stored session could not be restored");
                    auth.clear_session();
                }
            }
            auth.is_loading.set(false);
        });
    }

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(None), RwSignal::new(false)))
}
