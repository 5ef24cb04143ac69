//! Identity-provider calls and the shared session service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionService` is constructed once in `App` and provided via context. It
//! is the only writer of `RwSignal<AuthState>`: restoring the persisted
//! session on mount, following sign-in/sign-out in other tabs through the
//! `storage` event, and handing a fresh bearer token to every API call.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried. A failed restore reads as signed out; a refresh the
//! provider rejects signs the user out and surfaces as `Unauthorized`; a
//! refresh that never reached the provider surfaces as `Transport` and keeps
//! the session for the next attempt.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use leptos::prelude::*;
use schema::identity::{IdentityConfig, IdentityError, PasswordRequest};
use schema::{ApiError, Session};

use crate::state::auth::{AuthState, SessionUser};
use crate::util::storage;

/// `localStorage` key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "balancebite_session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordFlow {
    SignIn,
    SignUp,
}

#[cfg(any(test, feature = "hydrate"))]
fn flow_url(config: &IdentityConfig, flow: PasswordFlow) -> Result<String, IdentityError> {
    match flow {
        PasswordFlow::SignIn => config.sign_in_url(),
        PasswordFlow::SignUp => config.sign_up_url(),
    }
}

/// Wall-clock Unix milliseconds.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(feature = "hydrate")]
async fn post_identity<B, R>(url: &str, body: &B) -> Result<R, IdentityError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| IdentityError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Transport(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    let bytes = resp.binary().await.map_err(|e| IdentityError::Transport(e.to_string()))?;
    if !ok {
        return Err(schema::identity::error_from_identity_body(status, &bytes));
    }
    serde_json::from_slice(&bytes).map_err(|e| IdentityError::Malformed(e.to_string()))
}

/// Exchange email and password for a new session.
///
/// # Errors
///
/// Returns the mapped provider error, or `Unavailable` on the server.
pub async fn password_session(
    config: &IdentityConfig,
    flow: PasswordFlow,
    email: &str,
    password: &str,
) -> Result<Session, IdentityError> {
    let request = PasswordRequest::new(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let url = flow_url(config, flow)?;
        let resp: schema::identity::PasswordResponse = post_identity(&url, &request).await?;
        Session::from_password(resp, now_ms())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, flow, request);
        Err(IdentityError::Unavailable)
    }
}

/// Trade the refresh token for a new ID token.
///
/// # Errors
///
/// Returns the mapped provider error, or `Unavailable` on the server.
pub async fn refresh_session(config: &IdentityConfig, session: &Session) -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.refresh_url()?;
        let request = schema::identity::RefreshRequest::new(&session.refresh_token);
        let resp: schema::identity::RefreshResponse = post_identity(&url, &request).await?;
        session.refreshed(resp, now_ms())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        Err(IdentityError::Unavailable)
    }
}

/// Shared session handle; `Copy` so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct SessionService {
    auth: RwSignal<AuthState>,
    session: RwSignal<Option<Session>>,
    config: StoredValue<IdentityConfig>,
}

impl SessionService {
    pub fn new(auth: RwSignal<AuthState>, config: IdentityConfig) -> Self {
        Self { auth, session: RwSignal::new(None), config: StoredValue::new(config) }
    }

    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Load the persisted session and resolve `loading`.
    pub fn restore(&self) {
        self.publish(storage::load_json::<Session>(SESSION_STORAGE_KEY));
    }

    /// Follow sign-in/sign-out performed in other tabs until the owner is
    /// cleaned up.
    pub fn install_storage_listener(&self) {
        #[cfg(feature = "hydrate")]
        {
            let service = *self;
            let handle = window_event_listener(leptos::ev::storage, move |ev| {
                let key = ev.key();
                if key.is_none() || key.as_deref() == Some(SESSION_STORAGE_KEY) {
                    service.restore();
                }
            });
            on_cleanup(move || handle.remove());
        }
    }

    /// # Errors
    ///
    /// Returns the provider error mapped for inline display.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, IdentityError> {
        self.start(PasswordFlow::SignIn, email, password).await
    }

    /// # Errors
    ///
    /// Returns the provider error mapped for inline display.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SessionUser, IdentityError> {
        self.start(PasswordFlow::SignUp, email, password).await
    }

    pub fn sign_out(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.publish(None);
    }

    /// Bearer token for the next request, refreshed when close to expiry.
    ///
    /// # Errors
    ///
    /// `NoSession` when signed out; `Unauthorized` when the provider rejects
    /// the refresh (the session is cleared); `Transport` when it is unreachable.
    pub async fn id_token(&self) -> Result<String, ApiError> {
        let Some(current) = self.session.get_untracked() else {
            return Err(ApiError::NoSession);
        };
        if !current.needs_refresh(now_ms()) {
            return Ok(current.id_token);
        }
        let config = self.config.get_value();
        match refresh_session(&config, &current).await {
            Ok(next) => {
                let token = next.id_token.clone();
                self.persist(next);
                Ok(token)
            }
            Err(IdentityError::Transport(msg)) => Err(ApiError::Transport(msg)),
            Err(IdentityError::Unavailable) => Err(ApiError::Unavailable),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("token refresh rejected: {e}");
                self.sign_out();
                Err(e.into())
            }
        }
    }

    async fn start(&self, flow: PasswordFlow, email: &str, password: &str) -> Result<SessionUser, IdentityError> {
        let config = self.config.get_value();
        let session = password_session(&config, flow, email, password).await?;
        let user = SessionUser::from(&session);
        self.persist(session);
        Ok(user)
    }

    fn persist(&self, session: Session) {
        storage::save_json(SESSION_STORAGE_KEY, &session);
        self.publish(Some(session));
    }

    fn publish(&self, session: Option<Session>) {
        let user = session.as_ref().map(SessionUser::from);
        self.session.set(session);
        self.auth.set(AuthState::resolved(user));
    }
}
