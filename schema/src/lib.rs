//! Shared wire schema for the BalanceBite backend and identity provider.
//!
//! This crate owns the typed representation of every payload exchanged by
//! `client` (browser) and `cli` (terminal) with the external services. It
//! carries no transport: callers bring their own HTTP stack and hand raw
//! status codes and bodies to the decoding helpers here, which turn shape
//! mismatches into [`ApiError::Validation`] instead of trusting the payload.

#[macro_use]
mod wire_enum;

pub mod endpoint;
pub mod error;
pub mod feedback;
pub mod identity;
pub mod profile;
pub mod recipe;
pub mod report;
pub mod workout;

mod number;

pub use endpoint::{DEFAULT_API_BASE_URL, Endpoint, HttpMethod, bearer};
pub use error::{ApiError, ErrorBody, decode_json, error_from_status};
pub use feedback::{
    AdminSuggestionsResponse, AdminUser, AdminUsersResponse, MessageResponse, Suggestion, SuggestionRequest,
    display_date,
};
pub use identity::{IdentityConfig, IdentityError, Session};
pub use profile::{
    ActivityLevel, Goal, MacroTotals, MealPlanEntry, MealPlanResponse, Sex, SignupRequest, SignupResponse,
    UpdateProfileRequest, UpdateProfileResponse, UserProfile, bmi, format_bmi,
};
pub use recipe::{GeneratedRecipe, RecipeMacros, RecipeRequest, RecipeResponse, decode_recipe};
pub use report::{ReportKind, validate_pdf};
pub use workout::{WeekData, WorkoutLogRequest, WorkoutType};
