//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by `SessionService`; read by the auth provider, route guard,
//! navbar and pages to coordinate login redirects and identity-dependent
//! rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use schema::Session;

/// Identity fields safe to expose to views (no tokens).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        Self { uid: session.uid.clone(), email: session.email.clone() }
    }
}

/// Current user plus whether the first session event is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Loading until the persisted session has been inspected.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
