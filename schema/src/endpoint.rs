//! Backend REST endpoint table.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";

/// HTTP verbs used by the backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One authenticated backend operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Create the profile document after identity-provider signup.
    Signup,
    /// Fetch the profile with derived targets.
    Profile,
    /// Update profile fields; responds with the new profile and meal plan.
    UpdateProfile,
    /// Fetch the current meal plan.
    MealPlan,
    /// Log one week of workout data.
    Workout,
    /// Submit free-text feedback.
    Suggestion,
    /// Generate one AI recipe for a named meal.
    GenerateRecipe,
    /// PDF of the profile-update history.
    UserUpdatesReport,
    /// PDF of the weekly workout summary.
    WeeklyWorkoutReport,
    /// Admin listing of all users.
    AdminUsers,
    /// Admin listing of all suggestions.
    AdminSuggestions,
}

impl Endpoint {
    /// Every endpoint, in table order.
    pub const ALL: [Self; 11] = [
        Self::Signup,
        Self::Profile,
        Self::UpdateProfile,
        Self::MealPlan,
        Self::Workout,
        Self::Suggestion,
        Self::GenerateRecipe,
        Self::UserUpdatesReport,
        Self::WeeklyWorkoutReport,
        Self::AdminUsers,
        Self::AdminSuggestions,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Signup => "/api/signup",
            Self::Profile => "/api/user/profile",
            Self::UpdateProfile => "/api/user/update",
            Self::MealPlan => "/api/user/meal-plan",
            Self::Workout => "/api/workout",
            Self::Suggestion => "/api/suggestion",
            Self::GenerateRecipe => "/api/ai/generate-recipes",
            Self::UserUpdatesReport => "/api/report/user-updates",
            Self::WeeklyWorkoutReport => "/api/report/weekly-workout",
            Self::AdminUsers => "/api/admin/users",
            Self::AdminSuggestions => "/api/admin/suggestions",
        }
    }

    #[must_use]
    pub fn method(self) -> HttpMethod {
        match self {
            Self::Signup | Self::UpdateProfile | Self::Workout | Self::Suggestion | Self::GenerateRecipe => {
                HttpMethod::Post
            }
            Self::Profile
            | Self::MealPlan
            | Self::UserUpdatesReport
            | Self::WeeklyWorkoutReport
            | Self::AdminUsers
            | Self::AdminSuggestions => HttpMethod::Get,
        }
    }

    /// Absolute URL under `base_url`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Format an `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
