/// Pipeline-level errors
///
/// Almost every failure inside the pipeline degrades to a scored check
/// outcome instead of an error. The one exception is an image nobody can
/// read: with no pixels and no metadata there is no signal to score, so
/// the caller gets an explicit error instead of a misleading number.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The image bytes could not be read from the submitted source
    #[error("failed to read image data: {0}")]
    ImageRead(#[from] std::io::Error),

    /// The image bytes could not be decoded by any supported format
    #[error("image could not be decoded: {0}")]
    ImageUnreadable(#[from] image::ImageError),
}
