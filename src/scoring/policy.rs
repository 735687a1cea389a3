/// Fixed scoring policy
///
/// Every penalty weight, threshold, and heuristic constant of the trust
/// model lives here. These are policy, not tuning knobs: changing any of
/// them changes what the system accepts and must ship as a new policy
/// version, never as a silent edit.

/// Bumped whenever a weight or threshold below changes
pub const POLICY_VERSION: u32 = 1;

// ========== Decision thresholds ==========

/// Score at or above this is approved outright
pub const THRESHOLD_APPROVE: u8 = 80;
/// Score at or above this (but below approve) goes to manual review
pub const THRESHOLD_FLAG: u8 = 60;

// ========== Check thresholds ==========

/// How far the embedded GPS may sit from the claimed location
pub const MAX_GPS_DISTANCE_KM: f64 = 1.0;
/// How old a photo may be before it stops counting as recent
pub const MAX_IMAGE_AGE_HOURS: f64 = 24.0;
/// Detections below this confidence are discarded before scoring
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.25;

// ========== Penalties ==========

/// No EXIF container at all; covers the missing timestamp and the
/// missing GPS signal in one outcome
pub const PENALTY_METADATA_MISSING: u32 = 15;
/// EXIF container present but unreadable
pub const PENALTY_METADATA_UNREADABLE: u32 = 5;
/// Capture timestamp older than the age limit
pub const PENALTY_TIMESTAMP_OLD: u32 = 20;
/// No capture timestamp tag
pub const PENALTY_TIMESTAMP_MISSING: u32 = 10;
/// Timestamp tag present but malformed
pub const PENALTY_TIMESTAMP_UNPARSABLE: u32 = 5;
/// Embedded GPS further than the tolerance from the claimed location
pub const PENALTY_GPS_MISMATCH: u32 = 30;
/// Location claimed but the photo has no embedded GPS
pub const PENALTY_GPS_NO_EXIF: u32 = 10;
/// Image looks like a device screenshot
pub const PENALTY_SCREENSHOT: u32 = 25;
/// No detection capability attached; absence must not inflate trust,
/// so it costs the same as finding nothing
pub const PENALTY_CONTENT_SKIPPED: u32 = 30;
/// Detector ran and found no civic issue
pub const PENALTY_NO_CIVIC_DETECTED: u32 = 30;
/// Detector found objects, none matching the claimed category
pub const PENALTY_CATEGORY_MISMATCH: u32 = 20;

// ========== Screenshot heuristic ==========

/// Exact pixel dimensions of common phone screens; a match in either
/// orientation flags the image
pub const PHONE_RESOLUTIONS: [(u32, u32); 6] = [
    (1080, 2340),
    (1080, 2400),
    (1170, 2532),
    (1125, 2436),
    (1440, 3200),
    (1284, 2778),
];

/// Rows inspected at the top of the image for a uniform status bar
pub const STATUS_BAR_ROWS: u32 = 50;
/// Fewer distinct colors than this in the top strip flags the image
pub const STATUS_BAR_MAX_COLORS: usize = 10;
