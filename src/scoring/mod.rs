/// Trust score aggregation
///
/// Turns the per-check outcomes into one bounded score and a three-way
/// decision. The aggregator is total and side-effect free: the score is
/// the base score minus the sum of outcome penalties, clamped to
/// [0, 100], and the decision is a pure function of the score.

pub mod policy;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::checks::CheckOutcome;

/// What the caller should do with the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Flagged,
    Rejected,
}

/// User-facing messages. Deliberately generic for flagged and rejected
/// reports: naming the failing check would teach submitters how to game
/// the scorer. The full breakdown stays in `checks` for audit use.
const MSG_APPROVED: &str = "Report verified successfully.";
const MSG_FLAGGED: &str = "Your report is under review. We'll verify within 2 hours.";
const MSG_REJECTED: &str = "We couldn't verify this image. Please ensure your photo \
shows an actual civic issue, was taken recently at the reported location, and \
provides a clear view of the problem.";

/// Final verdict for one validation request. Produced once, immutable,
/// never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Trust score in [0, 100]
    pub score: u8,
    pub decision: Decision,
    /// Human-readable message for the submitter
    pub message: String,
    /// Audit breakdown: check name to outcome, at most one per check
    pub checks: BTreeMap<&'static str, CheckOutcome>,
}

impl ValidationResult {
    /// Serialize to the JSON output contract
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Combine check outcomes into the final verdict.
pub fn aggregate(checks: BTreeMap<&'static str, CheckOutcome>) -> ValidationResult {
    let penalty_total: u32 = checks.values().map(CheckOutcome::penalty).sum();
    let score = (100i64 - i64::from(penalty_total)).clamp(0, 100) as u8;
    let (decision, message) = decide(score);

    ValidationResult {
        score,
        decision,
        message: message.to_string(),
        checks,
    }
}

fn decide(score: u8) -> (Decision, &'static str) {
    if score >= policy::THRESHOLD_APPROVE {
        (Decision::Approved, MSG_APPROVED)
    } else if score >= policy::THRESHOLD_FLAG {
        (Decision::Flagged, MSG_FLAGGED)
    } else {
        (Decision::Rejected, MSG_REJECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::content::ContentOutcome;
    use crate::checks::freshness::FreshnessOutcome;
    use crate::checks::geo::GeoOutcome;
    use crate::checks::screenshot::ScreenshotOutcome;
    use crate::checks::ExifOutcome;
    use crate::detect::Detection;

    fn checks(entries: Vec<(&'static str, CheckOutcome)>) -> BTreeMap<&'static str, CheckOutcome> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_no_penalties_is_full_trust() {
        let result = aggregate(BTreeMap::new());
        assert_eq!(result.score, 100);
        assert_eq!(result.decision, Decision::Approved);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let result = aggregate(checks(vec![
            (
                "exif",
                ExifOutcome::Missing {
                    note: "no EXIF data found".to_string(),
                }
                .into(),
            ),
            ("gps", GeoOutcome::Mismatch { distance_km: 50.0 }.into()),
            ("screenshot", ScreenshotOutcome::Detected.into()),
            ("content", ContentOutcome::NoCivicDetected.into()),
        ]));
        // 15 + 30 + 25 + 30 = 100 in penalties
        assert_eq!(result.score, 0);
        assert_eq!(result.decision, Decision::Rejected);
    }

    #[test]
    fn test_decision_thresholds() {
        // 100 - 20 = 80: approved, boundary inclusive
        let approved = aggregate(checks(vec![(
            "timestamp",
            FreshnessOutcome::Old { age_hours: 30.0 }.into(),
        )]));
        assert_eq!(approved.score, 80);
        assert_eq!(approved.decision, Decision::Approved);

        // 100 - 25 = 75: flagged
        let flagged = aggregate(checks(vec![(
            "screenshot",
            ScreenshotOutcome::Detected.into(),
        )]));
        assert_eq!(flagged.score, 75);
        assert_eq!(flagged.decision, Decision::Flagged);

        // 100 - 30 - 10 = 60: flagged, boundary inclusive
        let lower_edge = aggregate(checks(vec![
            ("gps", GeoOutcome::Mismatch { distance_km: 5.0 }.into()),
            ("timestamp", FreshnessOutcome::Missing.into()),
        ]));
        assert_eq!(lower_edge.score, 60);
        assert_eq!(lower_edge.decision, Decision::Flagged);

        // 100 - 30 - 15 = 55: rejected
        let rejected = aggregate(checks(vec![
            ("content", ContentOutcome::NoCivicDetected.into()),
            (
                "exif",
                ExifOutcome::Missing {
                    note: "no EXIF data found".to_string(),
                }
                .into(),
            ),
        ]));
        assert_eq!(rejected.score, 55);
        assert_eq!(rejected.decision, Decision::Rejected);
    }

    #[test]
    fn test_clean_report_scores_full_marks() {
        // Recent photo, on-location GPS, no screenshot signals, detector
        // confirms the claimed pothole
        let result = aggregate(checks(vec![
            (
                "timestamp",
                FreshnessOutcome::Recent { age_hours: 1.5 }.into(),
            ),
            ("gps", GeoOutcome::Match { distance_km: 0.09 }.into()),
            ("screenshot", ScreenshotOutcome::NotDetected.into()),
            (
                "content",
                ContentOutcome::Match {
                    detected: vec![Detection::new("pothole", 0.91)],
                    claimed: "pothole".to_string(),
                }
                .into(),
            ),
        ]));
        assert_eq!(result.score, 100);
        assert_eq!(result.decision, Decision::Approved);
        assert_eq!(result.message, MSG_APPROVED);
    }

    #[test]
    fn test_distant_gps_alone_flags_the_report() {
        // Same clean report, but the claim sits across the city
        let result = aggregate(checks(vec![
            (
                "timestamp",
                FreshnessOutcome::Recent { age_hours: 1.5 }.into(),
            ),
            ("gps", GeoOutcome::Mismatch { distance_km: 35.0 }.into()),
            ("screenshot", ScreenshotOutcome::NotDetected.into()),
            (
                "content",
                ContentOutcome::Match {
                    detected: vec![Detection::new("pothole", 0.91)],
                    claimed: "pothole".to_string(),
                }
                .into(),
            ),
        ]));
        assert_eq!(result.score, 70);
        assert_eq!(result.decision, Decision::Flagged);
    }

    #[test]
    fn test_rejection_message_names_no_check() {
        let result = aggregate(checks(vec![
            ("gps", GeoOutcome::Mismatch { distance_km: 50.0 }.into()),
            ("screenshot", ScreenshotOutcome::Detected.into()),
            ("content", ContentOutcome::NoCivicDetected.into()),
        ]));
        assert_eq!(result.decision, Decision::Rejected);
        for word in ["gps", "screenshot", "detector", "exif"] {
            assert!(
                !result.message.to_lowercase().contains(word),
                "message leaks failing check: {word}"
            );
        }
    }

    #[test]
    fn test_result_serializes_to_output_contract() {
        let result = aggregate(checks(vec![(
            "screenshot",
            ScreenshotOutcome::NotDetected.into(),
        )]));
        let json = result.to_json().unwrap();
        assert!(json.contains(r#""score":100"#));
        assert!(json.contains(r#""decision":"approved""#));
        assert!(json.contains(r#""checks":{"screenshot":{"status":"not_detected"}}"#));
    }
}
