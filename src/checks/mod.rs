/// Authenticity checks
///
/// Each check is a pure function from extracted signals to a
/// check-specific outcome. Outcomes carry their own penalty and a detail
/// payload for the audit breakdown; a check can degrade to an error
/// status but never aborts the request.

pub mod content;
pub mod freshness;
pub mod geo;
pub mod screenshot;

use serde::Serialize;

use crate::scoring::policy;
use content::ContentOutcome;
use freshness::FreshnessOutcome;
use geo::GeoOutcome;
use screenshot::ScreenshotOutcome;

/// Outcome of the metadata extraction step itself, reported under the
/// `exif` key when the whole container is missing or unreadable. One
/// combined outcome stands in for the timestamp and GPS signals so the
/// same absence is never penalized twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExifOutcome {
    /// No EXIF container in the image
    Missing { note: String },
    /// Container could not be read
    Error { error: String },
}

impl ExifOutcome {
    pub fn penalty(&self) -> u32 {
        match self {
            ExifOutcome::Missing { .. } => policy::PENALTY_METADATA_MISSING,
            ExifOutcome::Error { .. } => policy::PENALTY_METADATA_UNREADABLE,
        }
    }
}

/// One entry in the per-request audit breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Exif(ExifOutcome),
    Timestamp(FreshnessOutcome),
    Gps(GeoOutcome),
    Screenshot(ScreenshotOutcome),
    Content(ContentOutcome),
}

impl CheckOutcome {
    /// Points this outcome subtracts from the base score
    pub fn penalty(&self) -> u32 {
        match self {
            CheckOutcome::Exif(outcome) => outcome.penalty(),
            CheckOutcome::Timestamp(outcome) => outcome.penalty(),
            CheckOutcome::Gps(outcome) => outcome.penalty(),
            CheckOutcome::Screenshot(outcome) => outcome.penalty(),
            CheckOutcome::Content(outcome) => outcome.penalty(),
        }
    }
}

impl From<ExifOutcome> for CheckOutcome {
    fn from(outcome: ExifOutcome) -> Self {
        CheckOutcome::Exif(outcome)
    }
}

impl From<FreshnessOutcome> for CheckOutcome {
    fn from(outcome: FreshnessOutcome) -> Self {
        CheckOutcome::Timestamp(outcome)
    }
}

impl From<GeoOutcome> for CheckOutcome {
    fn from(outcome: GeoOutcome) -> Self {
        CheckOutcome::Gps(outcome)
    }
}

impl From<ScreenshotOutcome> for CheckOutcome {
    fn from(outcome: ScreenshotOutcome) -> Self {
        CheckOutcome::Screenshot(outcome)
    }
}

impl From<ContentOutcome> for CheckOutcome {
    fn from(outcome: ContentOutcome) -> Self {
        CheckOutcome::Content(outcome)
    }
}
