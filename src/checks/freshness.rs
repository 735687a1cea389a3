/// Capture-time freshness check
///
/// A genuine report is photographed close to when it is submitted. The
/// check compares the embedded capture timestamp against the submission
/// clock; stale, malformed, and missing timestamps each carry their own
/// penalty.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::metadata::CaptureTime;
use crate::scoring::policy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FreshnessOutcome {
    /// Photo is within the allowed age
    Recent { age_hours: f64 },
    /// Photo is older than the allowed age
    Old { age_hours: f64 },
    /// Timestamp tag exists but does not parse
    ParseError,
    /// No timestamp tag in the metadata
    Missing,
}

impl FreshnessOutcome {
    pub fn penalty(&self) -> u32 {
        match self {
            FreshnessOutcome::Recent { .. } => 0,
            FreshnessOutcome::Old { .. } => policy::PENALTY_TIMESTAMP_OLD,
            FreshnessOutcome::ParseError => policy::PENALTY_TIMESTAMP_UNPARSABLE,
            FreshnessOutcome::Missing => policy::PENALTY_TIMESTAMP_MISSING,
        }
    }
}

/// Age the capture time against `now`. Strictly older than the limit
/// counts as old; exactly at the limit is still recent.
pub fn check_freshness(captured_at: CaptureTime, now: NaiveDateTime) -> FreshnessOutcome {
    match captured_at {
        CaptureTime::Absent => FreshnessOutcome::Missing,
        CaptureTime::Unparsable => FreshnessOutcome::ParseError,
        CaptureTime::At(taken) => {
            let age_hours = (now - taken).num_seconds() as f64 / 3600.0;
            if age_hours > policy::MAX_IMAGE_AGE_HOURS {
                FreshnessOutcome::Old { age_hours }
            } else {
                FreshnessOutcome::Recent { age_hours }
            }
        }
    }
}
