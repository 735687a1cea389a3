/// Validation pipeline orchestrator
///
/// Runs every authenticity check over one request and aggregates the
/// outcomes into a final verdict. All accumulation state is created
/// fresh per call; nothing here is shared between concurrent requests,
/// so the pipeline can run on as many threads as the caller likes. The
/// only shared resource, the detection capability, is passed in by
/// value and read-only.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};

use crate::checks::{content, freshness, geo, screenshot, CheckOutcome, ExifOutcome};
use crate::detect::Capability;
use crate::error::ValidationError;
use crate::metadata::{self, MetadataError};
use crate::report::ValidationRequest;
use crate::scoring::{self, ValidationResult};

/// Validate a report against the submission clock.
pub fn validate_report(
    request: &ValidationRequest,
    capability: &Capability,
) -> Result<ValidationResult, ValidationError> {
    validate_report_at(request, capability, Local::now().naive_local())
}

/// Validate a report against a fixed clock.
///
/// The pipeline is deterministic for a fixed `now`: identical bytes,
/// claims, and detections always produce an identical result. This is
/// the entry point tests and replay tooling should use.
pub fn validate_report_at(
    request: &ValidationRequest,
    capability: &Capability,
    now: NaiveDateTime,
) -> Result<ValidationResult, ValidationError> {
    let bytes = request.image.read()?;
    // An image nobody can decode yields no signal at all; that is the
    // one failure surfaced as an error instead of a score
    let pixels = image::load_from_memory(&bytes)?;

    let mut outcomes: BTreeMap<&'static str, CheckOutcome> = BTreeMap::new();

    match metadata::extract(&bytes) {
        Ok(meta) => {
            outcomes.insert(
                "timestamp",
                freshness::check_freshness(meta.captured_at, now).into(),
            );
            if let Some(outcome) = geo::check_location(meta.location, request.claimed_location) {
                outcomes.insert("gps", outcome.into());
            }
        }
        Err(MetadataError::Missing) => {
            // One combined outcome stands in for the absent timestamp
            // and the absent GPS; the individual checks are suppressed
            outcomes.insert(
                "exif",
                ExifOutcome::Missing {
                    note: "no EXIF data found".to_string(),
                }
                .into(),
            );
        }
        Err(MetadataError::Unreadable(error)) => {
            log::warn!("EXIF container unreadable: {error}");
            outcomes.insert("exif", ExifOutcome::Error { error }.into());
        }
    }

    outcomes.insert("screenshot", screenshot::check_screenshot(&pixels).into());
    outcomes.insert(
        "content",
        content::check_content(capability, &pixels, request.claimed_category.as_deref()).into(),
    );

    let result = scoring::aggregate(outcomes);
    log::info!(
        "report scored {} ({:?}), submitter {}",
        result.score,
        result.decision,
        request.submitter.as_deref().unwrap_or("-")
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Detection, ObjectDetector};
    use crate::report::ImageSource;
    use crate::scoring::Decision;
    use chrono::NaiveDate;
    use image::{DynamicImage, ImageBuffer, Rgba};
    use std::sync::Arc;

    struct FixedDetector(Vec<Detection>);

    impl ObjectDetector for FixedDetector {
        fn detect(&self, _image: &DynamicImage) -> Result<Vec<Detection>, String> {
            Ok(self.0.clone())
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// PNG bytes with camera-like color variation and no EXIF container
    fn photo_like_png() -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_fn(200, 150, |x, y| {
            Rgba([
                (x % 256) as u8,
                (y % 256) as u8,
                ((x * y) % 256) as u8,
                255,
            ])
        }));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    #[test]
    fn test_unreadable_image_is_a_pipeline_error() {
        let request = ValidationRequest::new(ImageSource::Bytes(b"not an image".to_vec()));
        let result = validate_report_at(&request, &Capability::NoDetector, noon());
        assert!(matches!(result, Err(ValidationError::ImageUnreadable(_))));
    }

    #[test]
    fn test_missing_file_is_a_pipeline_error() {
        let request =
            ValidationRequest::new(ImageSource::Path("/nonexistent/report.jpg".into()));
        let result = validate_report_at(&request, &Capability::NoDetector, noon());
        assert!(matches!(result, Err(ValidationError::ImageRead(_))));
    }

    #[test]
    fn test_no_exif_and_no_detector_rejects() {
        // Combined metadata penalty (15) plus capability absence (30)
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()));
        let result = validate_report_at(&request, &Capability::NoDetector, noon()).unwrap();

        assert_eq!(result.score, 55);
        assert_eq!(result.decision, Decision::Rejected);
        assert!(result.checks.contains_key("exif"));
        assert!(result.checks.contains_key("screenshot"));
        assert!(result.checks.contains_key("content"));
    }

    #[test]
    fn test_missing_exif_suppresses_timestamp_and_gps_outcomes() {
        // Even with a claimed location, absent metadata must produce the
        // single combined outcome rather than stacking gps on top
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()))
            .with_location(28.6139, 77.2090);
        let result = validate_report_at(&request, &Capability::NoDetector, noon()).unwrap();

        assert!(result.checks.contains_key("exif"));
        assert!(!result.checks.contains_key("timestamp"));
        assert!(!result.checks.contains_key("gps"));
        assert_eq!(result.score, 55);
    }

    #[test]
    fn test_detector_match_lifts_score_to_approval() {
        let capability = Capability::Detector(Arc::new(FixedDetector(vec![Detection::new(
            "pothole", 0.88,
        )])));
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()))
            .with_category("pothole");
        let result = validate_report_at(&request, &capability, noon()).unwrap();

        // Only the combined metadata penalty remains
        assert_eq!(result.score, 85);
        assert_eq!(result.decision, Decision::Approved);
    }

    #[test]
    fn test_capability_absence_parity_with_empty_detector() {
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()));

        let absent = validate_report_at(&request, &Capability::NoDetector, noon()).unwrap();
        let empty_capability = Capability::Detector(Arc::new(FixedDetector(vec![])));
        let empty = validate_report_at(&request, &empty_capability, noon()).unwrap();

        assert_eq!(absent.score, empty.score);
        assert_eq!(absent.decision, empty.decision);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()))
            .with_category("pothole")
            .with_submitter("user-7");
        let capability = Capability::Detector(Arc::new(FixedDetector(vec![Detection::new(
            "garbage", 0.6,
        )])));

        let first = validate_report_at(&request, &capability, noon()).unwrap();
        let second = validate_report_at(&request, &capability, noon()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_json_has_contract_fields() {
        let request = ValidationRequest::new(ImageSource::Bytes(photo_like_png()));
        let result = validate_report_at(&request, &Capability::NoDetector, noon()).unwrap();
        let json = result.to_json().unwrap();

        assert!(json.contains(r#""score":55"#));
        assert!(json.contains(r#""decision":"rejected""#));
        assert!(json.contains(r#""status":"skipped""#));
    }
}
