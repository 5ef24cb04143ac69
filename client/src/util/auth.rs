//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider installs one route guard for the whole page tree, so
//! every protected route gets identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: [&str; 3] = ["/", "/login", "/signup"];

/// Whether `path` is in the public allowlist. A trailing slash is ignored.
pub fn is_public_route(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    PUBLIC_ROUTES.contains(&normalized)
}

/// True once auth has loaded, no user is present and `path` is protected.
pub fn should_redirect_unauth(state: &AuthState, path: &str) -> bool {
    !state.loading && state.user.is_none() && !is_public_route(path)
}

/// Whether a page's one-shot authenticated fetch may start now.
pub fn ready_for_authed_fetch(already_requested: bool, state: &AuthState) -> bool {
    !already_requested && state.is_signed_in()
}

/// Redirect to `/login` whenever the route or session changes into an
/// unauthenticated visit to a protected route.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if auth.with(|state| should_redirect_unauth(state, &path)) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
