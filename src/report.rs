/// Shared data structures for a submitted report
///
/// These structs represent one incoming validation request: the image
/// being checked plus the claims the submitter made about it. A request
/// is immutable for the duration of one validation.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

/// A WGS-84 position in signed decimal degrees (south/west negative)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Where the image bytes come from
///
/// Upload handlers usually hold the bytes already; batch tooling passes a
/// path. Either way the pipeline works on one owned byte buffer.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Path to an image file on disk
    Path(PathBuf),
    /// Raw image bytes, e.g. straight from a multipart upload
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Read the image bytes, whatever the source.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        match self {
            ImageSource::Path(path) => fs::read(path),
            ImageSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

/// One photo-plus-location report awaiting a trust decision
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// The submitted photo
    pub image: ImageSource,
    /// Where the submitter says the photo was taken
    pub claimed_location: Option<Coordinate>,
    /// Issue category the submitter selected (e.g. "pothole", "garbage")
    pub claimed_category: Option<String>,
    /// Opaque submitter identifier, carried for audit only - never scored
    pub submitter: Option<String>,
}

impl ValidationRequest {
    /// Create a request with no claims attached
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            claimed_location: None,
            claimed_category: None,
            submitter: None,
        }
    }

    /// Attach the claimed capture location
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.claimed_location = Some(Coordinate::new(latitude, longitude));
        self
    }

    /// Attach the claimed issue category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.claimed_category = Some(category.into());
        self
    }

    /// Attach the submitter identifier
    pub fn with_submitter(mut self, submitter: impl Into<String>) -> Self {
        self.submitter = Some(submitter.into());
        self
    }
}
