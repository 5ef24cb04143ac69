//! Suggestion and admin listing payloads.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::ApiError;

/// Longest suggestion the forms accept, in characters.
pub const MAX_SUGGESTION_CHARS: usize = 2000;

/// `POST /api/suggestion` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub suggestion: String,
}

impl SuggestionRequest {
    /// Trim and bound the free text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank or oversized text.
    pub fn new(text: &str) -> Result<Self, ApiError> {
        let suggestion = text.trim();
        if suggestion.is_empty() {
            return Err(ApiError::Validation("suggestion must not be empty".to_owned()));
        }
        if suggestion.chars().count() > MAX_SUGGESTION_CHARS {
            return Err(ApiError::Validation(format!(
                "suggestion must be at most {MAX_SUGGESTION_CHARS} characters"
            )));
        }
        Ok(Self { suggestion: suggestion.to_owned() })
    }
}

/// `{"message": "..."}` acknowledgement returned by write endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One feedback entry as listed for admins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub suggestion: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One registered user as listed for admins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Kept as text: older documents carry goals this build may not know.
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUser>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Render a backend timestamp as `YYYY-MM-DD`.
///
/// The backend emits naive ISO-8601 (`2025-01-07T10:00:00.123456`); offset
/// forms are accepted too. Anything else is shown as sent, and a missing
/// value as an em-dash.
#[must_use]
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "—".to_owned();
    };
    let date = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
        .map(PrimitiveDateTime::date)
        .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::DEFAULT).map(OffsetDateTime::date));
    match date {
        Ok(date) => date
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| raw.to_owned()),
        Err(_) => raw.to_owned(),
    }
}
