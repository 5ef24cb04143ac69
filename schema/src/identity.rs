//! Identity-provider (Firebase Auth REST) payloads and session model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Email/password accounts live in the identity provider, not in the
//! backend. The provider issues a short-lived ID token (the bearer token the
//! backend verifies) and a long-lived refresh token. `client` persists the
//! resulting [`Session`] in local storage; `cli` keeps it in memory for one
//! invocation.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures arrive as `{"error": {"message": "CODE"}}`, sometimes
//! with a ` : detail` suffix on the code. Codes map onto [`IdentityError`]
//! variants whose `user_message` is safe to show inline on the auth forms.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
pub const SECURE_TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";

/// Tokens are refreshed this long before they expire.
pub const REFRESH_MARGIN_MS: u64 = 60_000;

/// Minimum password length the provider enforces.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider API key is not configured")]
    NotConfigured,
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailExists,
    #[error("password too weak")]
    WeakPassword,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("too many attempts")]
    TooManyAttempts,
    #[error("account disabled")]
    UserDisabled,
    /// Refresh token rejected or the account vanished.
    #[error("session expired")]
    SessionExpired,
    #[error("identity provider error: {0}")]
    Provider(String),
    #[error("identity network error: {0}")]
    Transport(String),
    #[error("unexpected identity response: {0}")]
    Malformed(String),
    #[error("not available on server")]
    Unavailable,
}

impl IdentityError {
    /// Map a provider error code (`"WEAK_PASSWORD : Password should be..."`).
    #[must_use]
    pub fn from_code(raw: &str) -> Self {
        let code = raw.split(':').next().unwrap_or_default().trim();
        match code {
            "INVALID_LOGIN_CREDENTIALS" | "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" => Self::InvalidCredentials,
            "EMAIL_EXISTS" => Self::EmailExists,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "MISSING_EMAIL" => Self::MissingEmail,
            "MISSING_PASSWORD" => Self::MissingPassword,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            "USER_DISABLED" => Self::UserDisabled,
            "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => Self::SessionExpired,
            "API_KEY_INVALID" | "INVALID_API_KEY" => Self::NotConfigured,
            other => Self::Provider(other.to_owned()),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured => "Sign-in is not configured for this build.".to_owned(),
            Self::MissingEmail => "Please enter your email.".to_owned(),
            Self::MissingPassword => "Please enter your password.".to_owned(),
            Self::InvalidCredentials => "Invalid email or password.".to_owned(),
            Self::EmailExists => "An account with this email already exists.".to_owned(),
            Self::WeakPassword => format!("Password should be at least {MIN_PASSWORD_LEN} characters."),
            Self::InvalidEmail => "Please enter a valid email address.".to_owned(),
            Self::TooManyAttempts => "Too many attempts. Please try again later.".to_owned(),
            Self::UserDisabled => "This account has been disabled.".to_owned(),
            Self::SessionExpired => "Your session has expired. Please log in again.".to_owned(),
            Self::Provider(code) => format!("Authentication failed ({code})."),
            Self::Transport(_) => "Could not reach the sign-in service. Check your connection.".to_owned(),
            Self::Malformed(_) => "Unexpected response from the sign-in service.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Transport(msg) => Self::Transport(msg),
            IdentityError::Unavailable => Self::Unavailable,
            other => Self::Unauthorized(other.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Map a non-success provider response to an [`IdentityError`].
#[must_use]
pub fn error_from_identity_body(status: u16, body: &[u8]) -> IdentityError {
    serde_json::from_slice::<ProviderErrorBody>(body)
        .map_or_else(|_| IdentityError::Provider(format!("HTTP {status}")), |b| IdentityError::from_code(&b.error.message))
}

// =============================================================================
// CONFIG
// =============================================================================

/// Public web API key. It identifies the project; it is not a secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
}

impl IdentityConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into().trim().to_owned() }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`IdentityError::NotConfigured`] without an API key.
    pub fn sign_up_url(&self) -> Result<String, IdentityError> {
        self.keyed(&format!("{IDENTITY_TOOLKIT_BASE}/accounts:signUp"))
    }

    /// # Errors
    ///
    /// Returns [`IdentityError::NotConfigured`] without an API key.
    pub fn sign_in_url(&self) -> Result<String, IdentityError> {
        self.keyed(&format!("{IDENTITY_TOOLKIT_BASE}/accounts:signInWithPassword"))
    }

    /// # Errors
    ///
    /// Returns [`IdentityError::NotConfigured`] without an API key.
    pub fn refresh_url(&self) -> Result<String, IdentityError> {
        self.keyed(&format!("{SECURE_TOKEN_BASE}/token"))
    }

    fn keyed(&self, url: &str) -> Result<String, IdentityError> {
        if !self.is_configured() {
            return Err(IdentityError::NotConfigured);
        }
        Ok(format!("{url}?key={}", self.api_key))
    }
}

// =============================================================================
// WIRE
// =============================================================================

/// Body for both `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl PasswordRequest {
    /// # Errors
    ///
    /// Returns [`IdentityError::MissingEmail`] or
    /// [`IdentityError::MissingPassword`] for blank fields.
    pub fn new(email: &str, password: &str) -> Result<Self, IdentityError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(IdentityError::MissingEmail);
        }
        if password.is_empty() {
            return Err(IdentityError::MissingPassword);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned(), return_secure_token: true })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResponse {
    pub id_token: String,
    #[serde(default)]
    pub email: String,
    pub refresh_token: String,
    /// Seconds, as a decimal string.
    pub expires_in: String,
    pub local_id: String,
}

/// `securetoken` refresh body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub grant_type: &'static str,
    pub refresh_token: String,
}

impl RefreshRequest {
    #[must_use]
    pub fn new(refresh_token: &str) -> Self {
        Self { grant_type: "refresh_token", refresh_token: refresh_token.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub user_id: String,
}

// =============================================================================
// SESSION
// =============================================================================

/// Signed-in identity plus its tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Wall-clock expiry of `id_token`, Unix milliseconds.
    pub expires_at_ms: u64,
}

impl Session {
    /// # Errors
    ///
    /// Returns [`IdentityError::Malformed`] for an unparseable `expiresIn`.
    pub fn from_password(resp: PasswordResponse, now_ms: u64) -> Result<Self, IdentityError> {
        Ok(Self {
            expires_at_ms: expires_at(now_ms, &resp.expires_in)?,
            uid: resp.local_id,
            email: resp.email,
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        })
    }

    /// Session after a token refresh; email is carried over.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Malformed`] when the refresh belongs to a
    /// different user or carries an unparseable expiry.
    pub fn refreshed(&self, resp: RefreshResponse, now_ms: u64) -> Result<Self, IdentityError> {
        if resp.user_id != self.uid {
            return Err(IdentityError::Malformed("refresh returned a different user".to_owned()));
        }
        Ok(Self {
            uid: self.uid.clone(),
            email: self.email.clone(),
            expires_at_ms: expires_at(now_ms, &resp.expires_in)?,
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        })
    }

    /// True once the ID token is within [`REFRESH_MARGIN_MS`] of expiry.
    #[must_use]
    pub fn needs_refresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_add(REFRESH_MARGIN_MS) >= self.expires_at_ms
    }
}

fn expires_at(now_ms: u64, expires_in: &str) -> Result<u64, IdentityError> {
    let secs: u64 = expires_in
        .trim()
        .parse()
        .map_err(|_| IdentityError::Malformed(format!("expiresIn {expires_in:?}")))?;
    Ok(now_ms.saturating_add(secs.saturating_mul(1000)))
}
