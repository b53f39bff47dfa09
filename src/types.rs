use chrono::{DateTime, NaiveTime, Timelike};
use chrono_tz::Tz;

use crate::error::ShadowFlipError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ShadowFlipError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ShadowFlipError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ShadowFlipError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Sunrise and sunset for one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayBounds {
    Regular {
        sunrise: DateTime<Tz>,
        sunset: DateTime<Tz>,
    },
    PolarDay,
    PolarNight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateWindow {
    PolarDay,
    PolarNight,
    /// Sunset not after sunrise, or on another local day.
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundReason {
    NoCrossing,
    DegenerateDaylightWindow(DegenerateWindow),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowFlip {
    pub instant: DateTime<Tz>,
    pub azimuth: f64,
    pub shadow_heading: f64,
    pub matched_bearing: f64,
}

impl ShadowFlip {
    pub fn time_of_day(&self) -> NaiveTime {
        self.instant.time()
    }

    /// Short 12-hour clock form, e.g. `1:08pm`.
    pub fn format_12h(&self) -> String {
        let (pm, hour) = self.instant.hour12();
        let suffix = if pm { "pm" } else { "am" };
        format!("{}:{:02}{}", hour, self.instant.minute(), suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipResult {
    Found(ShadowFlip),
    NotFound(NotFoundReason),
}

impl FlipResult {
    pub fn flip(&self) -> Option<&ShadowFlip> {
        match self {
            FlipResult::Found(flip) => Some(flip),
            FlipResult::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FlipResult::Found(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaModelConfig {
    pub elevation_m: f64,
    pub refraction: bool,
}

impl Default for SpaModelConfig {
    fn default() -> Self {
        Self {
            elevation_m: 0.0,
            refraction: true,
        }
    }
}
