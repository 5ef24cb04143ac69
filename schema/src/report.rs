//! Downloadable PDF reports.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Leading bytes of every PDF document.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// MIME type attached to report blobs.
pub const PDF_MIME: &str = "application/pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// History of profile updates.
    UserUpdates,
    /// Weekly workout summary.
    WeeklyWorkout,
}

impl ReportKind {
    pub const ALL: [Self; 2] = [Self::UserUpdates, Self::WeeklyWorkout];

    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::UserUpdates => Endpoint::UserUpdatesReport,
            Self::WeeklyWorkout => Endpoint::WeeklyWorkoutReport,
        }
    }

    /// File name offered to the browser's save dialog.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::UserUpdates => "user_report.pdf",
            Self::WeeklyWorkout => "workout_report.pdf",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UserUpdates => "Download Profile History",
            Self::WeeklyWorkout => "Download Workout Report",
        }
    }

    /// CLI spelling.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::UserUpdates => "user-updates",
            Self::WeeklyWorkout => "weekly-workout",
        }
    }
}

/// Reject report bodies that are not PDF documents.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the body lacks the PDF signature,
/// e.g. an HTML error page served with a 200.
pub fn validate_pdf(body: &[u8]) -> Result<(), ApiError> {
    if body.starts_with(PDF_SIGNATURE) {
        Ok(())
    } else {
        Err(ApiError::Validation("report is not a PDF document".to_owned()))
    }
}
