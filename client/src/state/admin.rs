//! Admin panel view state.
//!
//! Users and suggestions are fetched in parallel; the panel renders only
//! when both succeed. A 403 from either call switches to the access-denied
//! panel with a single toast and no partial lists.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use schema::{AdminUser, ApiError, Suggestion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminState {
    pub loading: bool,
    pub denied: bool,
    pub error: Option<String>,
    pub users: Vec<AdminUser>,
    pub suggestions: Vec<Suggestion>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self { loading: true, denied: false, error: None, users: Vec::new(), suggestions: Vec::new() }
    }
}

impl AdminState {
    /// Merge both listing results. Returns the one message to toast, if any.
    pub fn resolve(
        &mut self,
        users: Result<Vec<AdminUser>, ApiError>,
        suggestions: Result<Vec<Suggestion>, ApiError>,
    ) -> Option<String> {
        self.loading = false;
        match (users, suggestions) {
            (Ok(users), Ok(suggestions)) => {
                self.denied = false;
                self.error = None;
                self.users = users;
                self.suggestions = suggestions;
                None
            }
            (users, suggestions) => {
                self.users.clear();
                self.suggestions.clear();
                let errors = [users.err(), suggestions.err()];
                let mut errors = errors.into_iter().flatten();
                let first = errors.next()?;
                let denied = first.is_access_denied() || errors.any(|e| e.is_access_denied());
                if denied {
                    self.denied = true;
                    self.error = None;
                    Some(ApiError::Forbidden(String::new()).user_message())
                } else {
                    let message = first.user_message();
                    self.error = Some(message.clone());
                    Some(message)
                }
            }
        }
    }
}
