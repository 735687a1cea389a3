/// EXIF-equivalent metadata extraction
///
/// This module reads the structured side-data a camera embeds in an image
/// file - capture timestamp and device GPS - without touching pixel
/// content. Extraction is a pure function over the image bytes and has to
/// tolerate every flavor of partial data found in the wild: no EXIF
/// container at all, a timestamp that does not parse, or a GPS block with
/// one axis missing.

pub mod gps;

use std::io::Cursor;

use chrono::{NaiveDate, NaiveDateTime};
use exif::{In, Tag, Value};

use crate::report::Coordinate;

/// Embedded capture time.
///
/// Kept three-state because downstream scoring treats a malformed
/// timestamp (small penalty) differently from an absent one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureTime {
    /// No timestamp tag in the metadata
    Absent,
    /// A timestamp tag exists but its value does not parse
    Unparsable,
    /// Parsed capture time, local and naive as EXIF stores it
    At(NaiveDateTime),
}

/// Everything the extractor could recover from the image bytes.
/// Both fields may be empty; that is a scoring signal, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadata {
    pub captured_at: CaptureTime,
    pub location: Option<Coordinate>,
}

/// Why extraction produced no metadata at all
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// The image carries no EXIF container
    Missing,
    /// A container seems to be there but could not be read
    Unreadable(String),
}

/// Extract capture timestamp and embedded GPS from raw image bytes.
pub fn extract(bytes: &[u8]) -> Result<ImageMetadata, MetadataError> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| match e {
            exif::Error::NotFound(_) => MetadataError::Missing,
            other => MetadataError::Unreadable(other.to_string()),
        })?;

    Ok(ImageMetadata {
        captured_at: capture_time(&exif),
        location: embedded_location(&exif),
    })
}

/// Capture time from DateTimeOriginal, falling back to DateTime.
fn capture_time(exif: &exif::Exif) -> CaptureTime {
    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY));

    match field {
        None => CaptureTime::Absent,
        Some(field) => match parse_datetime(&field.value) {
            Some(timestamp) => CaptureTime::At(timestamp),
            None => CaptureTime::Unparsable,
        },
    }
}

/// Parse an EXIF ASCII timestamp ("YYYY:MM:DD HH:MM:SS") into a
/// NaiveDateTime. Returns None for anything malformed, including
/// syntactically valid strings with impossible calendar values.
fn parse_datetime(value: &Value) -> Option<NaiveDateTime> {
    let Value::Ascii(lines) = value else {
        return None;
    };
    let raw = lines.first()?;
    let dt = exif::DateTime::from_ascii(raw).ok()?;

    NaiveDate::from_ymd_opt(i32::from(dt.year), u32::from(dt.month), u32::from(dt.day))?
        .and_hms_opt(u32::from(dt.hour), u32::from(dt.minute), u32::from(dt.second))
}

/// Embedded GPS position. A coordinate only exists when both axes are
/// present and well-formed; a missing axis means "no GPS", never zero.
fn embedded_location(exif: &exif::Exif) -> Option<Coordinate> {
    let latitude = axis_degrees(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b"S")?;
    let longitude = axis_degrees(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b"W")?;
    Some(Coordinate::new(latitude, longitude))
}

/// One GPS axis: a degrees/minutes/seconds rational triple plus a
/// hemisphere reference that negates the southern/western half.
fn axis_degrees(exif: &exif::Exif, tag: Tag, ref_tag: Tag, negative_ref: &[u8]) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    let Value::Rational(parts) = &field.value else {
        return None;
    };

    // EXIF mandates exactly three rationals per axis
    let degrees = match parts.as_slice() {
        [d, m, s] => gps::dms_to_degrees(d.to_f64(), m.to_f64(), s.to_f64()),
        _ => return None,
    };
    if !degrees.is_finite() {
        return None;
    }

    let negate = exif
        .get_field(ref_tag, In::PRIMARY)
        .map(|field| match &field.value {
            Value::Ascii(refs) => refs
                .first()
                .map(|r| r.as_slice() == negative_ref)
                .unwrap_or(false),
            _ => false,
        })
        .unwrap_or(false);

    Some(if negate { -degrees } else { degrees })
}
