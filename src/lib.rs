//! Trust scoring for photo-based civic issue reports
//!
//! A submitted report is a photo plus claims: where it was taken and what
//! it shows. This crate extracts signals from the image (capture time,
//! embedded GPS, screenshot artifacts, optional object-detection output),
//! scores the report against a fixed penalty model, and returns an
//! approve/flag/reject decision with an auditable per-check breakdown.
//!
//! The crate never persists anything and never makes network calls;
//! storage, routing, and downstream workflow belong to the caller. The
//! only shared state is the process-wide detector registry in
//! [`detect::registry`].

pub mod checks;
pub mod detect;
pub mod error;
pub mod estimate;
pub mod metadata;
pub mod report;
pub mod scoring;
pub mod validator;

pub use detect::{Capability, Detection, ObjectDetector};
pub use error::ValidationError;
pub use report::{Coordinate, ImageSource, ValidationRequest};
pub use scoring::{Decision, ValidationResult};
pub use validator::{validate_report, validate_report_at};
