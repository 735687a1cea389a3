/// Screenshot detection heuristic
///
/// Screenshots are the cheapest way to fake a report: grab someone
/// else's photo off the web and resubmit it. Two structural signals,
/// either one sufficient to flag:
/// - pixel dimensions exactly matching a known phone screen, in either
///   orientation
/// - a near-uniform strip at the top of the image, the look of a
///   rendered status bar
///
/// This is a best-effort heuristic; it inspects pixel data only and
/// never fails the request.

use std::collections::HashSet;

use image::{DynamicImage, GenericImageView};
use serde::Serialize;

use crate::scoring::policy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreenshotOutcome {
    /// One of the screenshot signals fired
    Detected,
    /// No screenshot signal
    NotDetected,
    /// Pixel inspection failed; carries no penalty
    Error { error: String },
}

impl ScreenshotOutcome {
    pub fn penalty(&self) -> u32 {
        match self {
            ScreenshotOutcome::Detected => policy::PENALTY_SCREENSHOT,
            ScreenshotOutcome::NotDetected => 0,
            ScreenshotOutcome::Error { .. } => 0,
        }
    }
}

/// Run both screenshot signals over decoded pixels.
pub fn check_screenshot(image: &DynamicImage) -> ScreenshotOutcome {
    let (width, height) = image.dimensions();

    if is_phone_resolution(width, height) {
        log::debug!("screenshot signal: phone resolution {width}x{height}");
        return ScreenshotOutcome::Detected;
    }

    if has_uniform_status_bar(image) {
        log::debug!("screenshot signal: uniform top strip");
        return ScreenshotOutcome::Detected;
    }

    ScreenshotOutcome::NotDetected
}

fn is_phone_resolution(width: u32, height: u32) -> bool {
    policy::PHONE_RESOLUTIONS
        .iter()
        .any(|&(w, h)| (width, height) == (w, h) || (height, width) == (w, h))
}

/// Count distinct colors in the top strip (first 50 rows, or the whole
/// image if shorter). Very few colors means a flat rendered region
/// rather than camera noise.
fn has_uniform_status_bar(image: &DynamicImage) -> bool {
    let (width, height) = image.dimensions();
    let rows = height.min(policy::STATUS_BAR_ROWS);
    let strip = image.crop_imm(0, 0, width, rows).to_rgba8();

    let mut colors: HashSet<[u8; 4]> = HashSet::new();
    for pixel in strip.pixels() {
        colors.insert(pixel.0);
        if colors.len() >= policy::STATUS_BAR_MAX_COLORS {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    /// Image with enough color variation to look like a camera photo
    fn noisy_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([
                (x % 256) as u8,
                (y % 256) as u8,
                ((x + y) % 256) as u8,
                255,
            ])
        }))
    }

    fn flat_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
            width,
            height,
            Rgba([32u8, 32, 32, 255]),
        ))
    }

    #[test]
    fn test_noisy_photo_is_not_flagged() {
        let outcome = check_screenshot(&noisy_image(320, 240));
        assert_eq!(outcome, ScreenshotOutcome::NotDetected);
        assert_eq!(outcome.penalty(), 0);
    }

    #[test]
    fn test_phone_resolution_is_flagged() {
        let outcome = check_screenshot(&noisy_image(1080, 2340));
        assert_eq!(outcome, ScreenshotOutcome::Detected);
        assert_eq!(outcome.penalty(), 25);
    }

    #[test]
    fn test_phone_resolution_matches_transposed() {
        assert!(is_phone_resolution(2340, 1080));
        assert!(!is_phone_resolution(640, 480));
    }

    #[test]
    fn test_uniform_top_strip_is_flagged() {
        // Flat status-bar-like region above camera noise
        let mut buffer = noisy_image(200, 150).to_rgba8();
        for y in 0..50 {
            for x in 0..200 {
                buffer.put_pixel(x, y, Rgba([0u8, 0, 0, 255]));
            }
        }
        let outcome = check_screenshot(&DynamicImage::ImageRgba8(buffer));
        assert_eq!(outcome, ScreenshotOutcome::Detected);
    }

    #[test]
    fn test_short_image_uses_full_height_strip() {
        // 8 rows tall, entirely flat: the whole image is the strip
        let outcome = check_screenshot(&flat_image(64, 8));
        assert_eq!(outcome, ScreenshotOutcome::Detected);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ScreenshotOutcome::NotDetected).unwrap();
        assert_eq!(json, r#"{"status":"not_detected"}"#);
    }
}
