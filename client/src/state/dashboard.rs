//! Dashboard view state and form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page owns one `RwSignal<DashboardState>`. Profile and meal
//! plan are loaded in parallel on mount and each result updates only its own
//! slice. Successful mutations replace slices with the server's returned
//! values; nothing is updated optimistically.
//!
//! Form types hold raw input text and validate to typed requests before any
//! network call, returning the inline message on failure.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use schema::profile::DEFAULT_DIET_TYPE;
use schema::{
    ActivityLevel, ApiError, GeneratedRecipe, Goal, MacroTotals, MealPlanEntry, ReportKind, SuggestionRequest,
    UpdateProfileRequest, UpdateProfileResponse, UserProfile, WeekData, WorkoutLogRequest, WorkoutType,
};

/// Largest meals-per-day value the form accepts.
pub const MAX_MEALS_PER_DAY: u32 = 10;

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub loading: bool,
    pub profile: Option<UserProfile>,
    pub meal_plan: Vec<MealPlanEntry>,
    /// Load failure shown in place of the dashboard body.
    pub error: Option<String>,
    /// Recipe shown in the modal, if open.
    pub recipe: Option<GeneratedRecipe>,
    /// Meal whose recipe is being generated.
    pub recipe_pending: Option<String>,
    pub updating_profile: bool,
    pub logging_workout: bool,
    pub sending_suggestion: bool,
    pub downloading: Option<ReportKind>,
}

/// One ring's inputs: label, meal-plan total, profile target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroProgress {
    pub label: &'static str,
    pub current: f64,
    pub target: f64,
}

impl DashboardState {
    /// Merge the mount-time fetches. Returns the message to toast, if any.
    pub fn apply_load(
        &mut self,
        profile: Result<UserProfile, ApiError>,
        meal_plan: Result<Vec<MealPlanEntry>, ApiError>,
    ) -> Option<String> {
        self.loading = false;
        let mut failure = None;
        match profile {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_message());
                failure = Some(e.user_message());
            }
        }
        match meal_plan {
            Ok(plan) => self.meal_plan = plan,
            Err(e) => {
                failure.get_or_insert_with(|| e.user_message());
            }
        }
        failure
    }

    /// Replace profile and meal plan with an update response.
    pub fn apply_update(&mut self, resp: UpdateProfileResponse) {
        self.profile = Some(resp.user);
        self.meal_plan = resp.meal_plan;
    }

    /// Protein, carbs and fat: meal-plan totals against profile targets.
    #[must_use]
    pub fn macro_progress(&self) -> Option<[MacroProgress; 3]> {
        let profile = self.profile.as_ref()?;
        let totals = MacroTotals::of(&self.meal_plan);
        Some([
            MacroProgress { label: "Protein", current: totals.protein, target: profile.total_protein },
            MacroProgress { label: "Carbs", current: totals.carbs, target: profile.total_carbs },
            MacroProgress { label: "Fat", current: totals.fat, target: profile.total_fat },
        ])
    }
}

// =============================================================================
// PROFILE FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub weight: String,
    pub meals: String,
    pub a_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            weight: profile.weight.to_string(),
            meals: profile.meals.to_string(),
            a_level: profile.a_level,
            goal: profile.goal,
            diet_type: profile.diet_type.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<UpdateProfileRequest, &'static str> {
        let weight = parse_positive(&self.weight).ok_or("Weight must be a positive number.")?;
        let meals = parse_meals(&self.meals)?;
        let diet_type = self.diet_type.trim();
        Ok(UpdateProfileRequest {
            weight,
            meals,
            a_level: self.a_level,
            goal: self.goal,
            diet_type: if diet_type.is_empty() { DEFAULT_DIET_TYPE.to_owned() } else { diet_type.to_owned() },
        })
    }
}

// =============================================================================
// WORKOUT FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub week_start: String,
    /// Raw text per day, Monday first. Blank means zero.
    pub days: [String; 7],
}

impl WorkoutForm {
    /// # Errors
    ///
    /// Returns the inline message for a missing date or a bad daily value.
    pub fn validate(&self) -> Result<WorkoutLogRequest, &'static str> {
        if self.week_start.trim().is_empty() {
            return Err("Pick the week start date.");
        }
        let mut values = [0.0; 7];
        for (slot, raw) in values.iter_mut().zip(&self.days) {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            *slot = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or("Daily values must be non-negative numbers.")?;
        }
        WorkoutLogRequest::new(self.workout_type, &self.week_start, WeekData::from_days(values))
            .map_err(|_| "Week start must be a date (YYYY-MM-DD).")
    }
}

// =============================================================================
// SUGGESTION FORM
// =============================================================================

/// # Errors
///
/// Returns the inline message for blank or oversized text.
pub fn validate_suggestion(text: &str) -> Result<SuggestionRequest, &'static str> {
    if text.trim().is_empty() {
        return Err("Write a suggestion first.");
    }
    SuggestionRequest::new(text).map_err(|_| "Suggestion is too long.")
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

pub(crate) fn parse_meals(raw: &str) -> Result<u32, &'static str> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=MAX_MEALS_PER_DAY).contains(m))
        .ok_or("Meals per day must be a whole number from 1 to 10.")
}

