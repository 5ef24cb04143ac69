//! Profile, meal-plan and signup payloads.
//!
//! DESIGN
//! ======
//! The backend owns every derived figure (BMR, TDEE, targets, meal split).
//! These types carry them verbatim; the only value computed on this side is
//! BMI for display.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::number::deserialize_u32_from_number;

/// Diet type assumed when a profile predates the field.
pub const DEFAULT_DIET_TYPE: &str = "standard";

// =============================================================================
// ENUMS
// =============================================================================

/// Self-reported activity level. Wire values are lowercase phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::SuperActive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly active",
            Self::ModeratelyActive => "moderately active",
            Self::VeryActive => "very active",
            Self::SuperActive => "super active",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::SuperActive => "Super Active",
        }
    }
}

/// Body-composition goal that steers the backend's calorie target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Goal {
    Cutting,
    #[default]
    Maintenance,
    Bulking,
}

impl Goal {
    pub const ALL: [Self; 3] = [Self::Cutting, Self::Maintenance, Self::Bulking];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cutting => "cutting",
            Self::Maintenance => "maintenance",
            Self::Bulking => "bulking",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cutting => "Cutting",
            Self::Maintenance => "Maintenance",
            Self::Bulking => "Bulking",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

wire_enum_conversions!(ActivityLevel, "activity level");
wire_enum_conversions!(Goal, "goal");
wire_enum_conversions!(Sex, "sex");

// =============================================================================
// PROFILE
// =============================================================================

fn default_diet_type() -> String {
    DEFAULT_DIET_TYPE.to_owned()
}

/// Profile snapshot as returned by `GET /api/user/profile`.
///
/// Replaced wholesale on every fetch or update response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-provider UID (the backend's `_id`).
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub age: u32,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Meals per day.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub meals: u32,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub a_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default)]
    pub disliked_ingredients: Vec<String>,
    #[serde(default)]
    pub bmr: f64,
    pub tdee: f64,
    /// Goal-adjusted calories; absent on profiles created before goals existed.
    #[serde(default)]
    pub target_calories: Option<f64>,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub total_carbs: f64,
    #[serde(default)]
    pub total_fat: f64,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserProfile {
    /// Daily calorie target, falling back to TDEE for legacy profiles.
    #[must_use]
    pub fn target_calories(&self) -> f64 {
        self.target_calories.unwrap_or(self.tdee)
    }

    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        bmi(self.weight, self.height)
    }

    /// BMI with one decimal, or an em-dash placeholder when height is unusable.
    #[must_use]
    pub fn bmi_display(&self) -> String {
        self.bmi().map_or_else(|| "—".to_owned(), format_bmi)
    }
}

/// Body-mass index from kilograms and centimetres.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 || weight_kg < 0.0 {
        return None;
    }
    // Scale the numerator rather than the height so 160 cm stays exact.
    Some(weight_kg * 10_000.0 / (height_cm * height_cm))
}

/// One-decimal display with ties rounded away from zero (`31.25` → `"31.3"`).
#[must_use]
pub fn format_bmi(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

// =============================================================================
// MEAL PLAN
// =============================================================================

/// One meal of the server-generated plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    #[serde(default)]
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// `GET /api/user/meal-plan` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub meal_plan: Vec<MealPlanEntry>,
}

/// Sum of the macro columns across a meal plan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    #[must_use]
    pub fn of(entries: &[MealPlanEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, m| Self {
            calories: acc.calories + m.calories,
            protein: acc.protein + m.protein,
            carbs: acc.carbs + m.carbs,
            fat: acc.fat + m.fat,
        })
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// `POST /api/signup` body, sent right after identity-provider signup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub meals: u32,
    pub sex: Sex,
    pub a_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: String,
    pub disliked_ingredients: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: String,
    pub user: UserProfile,
}

/// `POST /api/user/update` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub weight: f64,
    pub meals: u32,
    pub a_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: String,
}

/// `POST /api/user/update` response: the new profile and regenerated plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    #[serde(default)]
    pub message: String,
    pub user: UserProfile,
    pub meal_plan: Vec<MealPlanEntry>,
}
