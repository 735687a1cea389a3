/// Civic content verification
///
/// Asks the detection capability what is actually in the photo and
/// compares it against what the submitter claims. Absence of the
/// capability is scored exactly like finding nothing - an unverifiable
/// report must never outscore a verified one.

use image::DynamicImage;
use serde::Serialize;

use crate::detect::{Capability, Detection};
use crate::scoring::policy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContentOutcome {
    /// No detection capability attached
    Skipped { note: String },
    /// Detector ran and found nothing above the confidence floor
    NoCivicDetected,
    /// Detections include the claimed category
    Match {
        detected: Vec<Detection>,
        claimed: String,
    },
    /// Detections exist but none match the claimed category
    Mismatch {
        detected: Vec<Detection>,
        claimed: String,
    },
    /// Detections exist and no category was claimed
    Detected { detected: Vec<Detection> },
    /// Inference failed; infrastructure trouble is not the submitter's
    /// fault, so no penalty beyond what absence already costs
    Error { error: String },
}

impl ContentOutcome {
    pub fn penalty(&self) -> u32 {
        match self {
            ContentOutcome::Skipped { .. } => policy::PENALTY_CONTENT_SKIPPED,
            ContentOutcome::NoCivicDetected => policy::PENALTY_NO_CIVIC_DETECTED,
            ContentOutcome::Match { .. } => 0,
            ContentOutcome::Mismatch { .. } => policy::PENALTY_CATEGORY_MISMATCH,
            ContentOutcome::Detected { .. } => 0,
            ContentOutcome::Error { .. } => 0,
        }
    }
}

/// Verify the image content against the claimed category.
pub fn check_content(
    capability: &Capability,
    image: &DynamicImage,
    claimed_category: Option<&str>,
) -> ContentOutcome {
    let detector = match capability {
        Capability::NoDetector => {
            return ContentOutcome::Skipped {
                note: "no detection capability attached".to_string(),
            };
        }
        Capability::Detector(detector) => detector,
    };

    let mut detections = match detector.detect(image) {
        Ok(detections) => detections,
        Err(error) => {
            log::warn!("content detection failed: {error}");
            return ContentOutcome::Error { error };
        }
    };
    detections.retain(|d| d.confidence >= policy::MIN_DETECTION_CONFIDENCE);

    if detections.is_empty() {
        return ContentOutcome::NoCivicDetected;
    }

    match claimed_category {
        None => ContentOutcome::Detected {
            detected: detections,
        },
        Some(claimed) => {
            let wanted = claimed.to_lowercase();
            let matched = detections
                .iter()
                .any(|d| d.label.to_lowercase() == wanted);
            if matched {
                ContentOutcome::Match {
                    detected: detections,
                    claimed: claimed.to_string(),
                }
            } else {
                ContentOutcome::Mismatch {
                    detected: detections,
                    claimed: claimed.to_string(),
                }
            }
        }
    }
}
