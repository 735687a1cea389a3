/// Object-detection capability boundary
///
/// The pipeline never runs a model itself. It consumes detection through
/// a narrow interface so that a real backend, a stub, or nothing at all
/// can be plugged in without the verifier changing. Absence is a first
/// class state - a missing capability is scored, not silently skipped.

pub mod registry;

use std::fmt;
use std::sync::Arc;

use image::DynamicImage;
use serde::Serialize;

/// One detected object: class label plus model confidence in [0, 1].
/// Serializes the label under the key `class` to match the audit
/// breakdown consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Minimal interface a detection backend has to provide.
///
/// Implementations report failures as plain strings; the verifier folds
/// them into an `error` outcome rather than aborting the request.
pub trait ObjectDetector: Send + Sync {
    /// Run inference over decoded pixels and return every detection the
    /// backend produced. Confidence filtering happens in the verifier.
    fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>, String>;

    /// Whether this backend can actually detect anything
    fn has_capability(&self) -> bool {
        true
    }
}

/// The detection capability a validation call runs with.
///
/// Two variants instead of an `Option` so the verifier dispatches on the
/// capability in exactly one place and the absence-still-penalizes rule
/// cannot be bypassed by a null check.
#[derive(Clone)]
pub enum Capability {
    /// No detection backend attached
    NoDetector,
    /// A shared, ready-to-run backend
    Detector(Arc<dyn ObjectDetector>),
}

impl Capability {
    pub fn has_capability(&self) -> bool {
        matches!(self, Capability::Detector(_))
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::NoDetector => write!(f, "NoDetector"),
            Capability::Detector(_) => write!(f, "Detector(..)"),
        }
    }
}
