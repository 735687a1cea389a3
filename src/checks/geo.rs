/// Location consistency check
///
/// Compares the GPS position embedded in the photo against the position
/// the submitter claims. Only meaningful when the submitter claimed a
/// location at all; without a claim there is nothing to contradict and
/// the check produces no outcome.

use serde::Serialize;

use crate::metadata::gps;
use crate::report::Coordinate;
use crate::scoring::policy;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeoOutcome {
    /// Embedded and claimed positions agree within tolerance
    Match { distance_km: f64 },
    /// Embedded position is further than the tolerance from the claim
    Mismatch { distance_km: f64 },
    /// A location was claimed but the photo has no embedded GPS
    NoExifGps,
}

impl GeoOutcome {
    pub fn penalty(&self) -> u32 {
        match self {
            GeoOutcome::Match { .. } => 0,
            GeoOutcome::Mismatch { .. } => policy::PENALTY_GPS_MISMATCH,
            GeoOutcome::NoExifGps => policy::PENALTY_GPS_NO_EXIF,
        }
    }
}

/// Evaluate the claimed location against the embedded one.
/// Returns None when no location was claimed - the check is skipped.
pub fn check_location(
    embedded: Option<Coordinate>,
    claimed: Option<Coordinate>,
) -> Option<GeoOutcome> {
    let claimed = claimed?;

    let Some(embedded) = embedded else {
        return Some(GeoOutcome::NoExifGps);
    };

    let distance_km = gps::haversine_km(embedded, claimed);
    if distance_km > policy::MAX_GPS_DISTANCE_KM {
        Some(GeoOutcome::Mismatch { distance_km })
    } else {
        Some(GeoOutcome::Match { distance_km })
    }
}
