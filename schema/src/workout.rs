//! Weekly workout log payload.

#[cfg(test)]
#[path = "workout_test.rs"]
mod workout_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::error::ApiError;

/// Activity tracked by a weekly log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkoutType {
    #[default]
    Steps,
    Cycling,
    Running,
    Yoga,
    Weightlifting,
}

impl WorkoutType {
    pub const ALL: [Self; 5] = [Self::Steps, Self::Cycling, Self::Running, Self::Yoga, Self::Weightlifting];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Cycling => "cycling",
            Self::Running => "running",
            Self::Yoga => "yoga",
            Self::Weightlifting => "weightlifting",
        }
    }

    /// Unit the daily values are measured in.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Cycling | Self::Running => "km",
            Self::Yoga => "min",
            Self::Weightlifting => "kg",
        }
    }

    /// Select-option text, e.g. `Cycling (km)`.
    #[must_use]
    pub fn label(self) -> String {
        let name = match self {
            Self::Steps => return "Steps".to_owned(),
            Self::Cycling => "Cycling",
            Self::Running => "Running",
            Self::Yoga => "Yoga",
            Self::Weightlifting => "Weightlifting",
        };
        format!("{name} ({})", self.unit())
    }
}

wire_enum_conversions!(WorkoutType, "workout type");

/// Seven daily values, Monday first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekData {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl WeekData {
    pub const DAYS: [&'static str; 7] = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

    #[must_use]
    pub fn from_days(days: [f64; 7]) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = days;
        Self { monday, tuesday, wednesday, thursday, friday, saturday, sunday }
    }

    #[must_use]
    pub fn to_days(self) -> [f64; 7] {
        [self.monday, self.tuesday, self.wednesday, self.thursday, self.friday, self.saturday, self.sunday]
    }
}

/// `POST /api/workout` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLogRequest {
    pub workout_type: WorkoutType,
    /// `YYYY-MM-DD`.
    pub week_start: String,
    pub week_data: WeekData,
}

impl WorkoutLogRequest {
    /// Build a log request, rejecting malformed dates and negative or
    /// non-finite daily values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] describing the first bad field.
    pub fn new(workout_type: WorkoutType, week_start: &str, week_data: WeekData) -> Result<Self, ApiError> {
        let week_start = parse_week_start(week_start)?;
        for (day, value) in WeekData::DAYS.iter().zip(week_data.to_days()) {
            if !value.is_finite() || value < 0.0 {
                return Err(ApiError::Validation(format!("{day} must be a non-negative number")));
            }
        }
        Ok(Self { workout_type, week_start, week_data })
    }
}

/// Normalize a `YYYY-MM-DD` week start.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the text is not a calendar date.
pub fn parse_week_start(raw: &str) -> Result<String, ApiError> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(raw.trim(), format)
        .map_err(|_| ApiError::Validation("week start must be a date (YYYY-MM-DD)".to_owned()))?;
    date.format(format)
        .map_err(|e| ApiError::Validation(e.to_string()))
}
