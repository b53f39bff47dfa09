use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use log::{debug, trace};
use solar_positioning::{
    Horizon, spa,
    time::DeltaT,
    types::{RefractionCorrection, SunriseResult},
};

use crate::angles::normalize_angle;
use crate::calendar::local_noon;
use crate::error::ShadowFlipError;
use crate::types::{DayBounds, GeoPoint, SpaModelConfig};

pub trait SolarAzimuthModel {
    /// Sunrise and sunset of the local calendar day `date` in `tz`.
    fn day_bounds(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        tz: Tz,
    ) -> Result<DayBounds, ShadowFlipError>;

    /// Sun azimuth in degrees, 0 = north, clockwise, in [0, 360).
    fn azimuth(&self, instant: &DateTime<Tz>, location: GeoPoint) -> Result<f64, ShadowFlipError>;
}

/// NREL Solar Position Algorithm via `solar_positioning`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaModel {
    pub config: SpaModelConfig,
}

impl SpaModel {
    pub fn new(config: SpaModelConfig) -> Self {
        Self { config }
    }

    fn delta_t(&self, year: i32, month: u32) -> Result<f64, ShadowFlipError> {
        let delta_t = DeltaT::estimate_from_date(year, month).map_err(model_error)?;
        trace!("delta T for {}-{:02}: {:.2}s", year, month, delta_t);
        Ok(delta_t)
    }

    fn horizon_events(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        tz: Tz,
    ) -> Result<SunriseResult<DateTime<Tz>>, ShadowFlipError> {
        let anchor = local_noon(date, &tz).ok_or_else(|| {
            ShadowFlipError::Model(format!("{} has no local noon in {}", date, tz))
        })?;
        let delta_t = self.delta_t(date.year(), date.month())?;
        spa::sunrise_sunset_for_horizon(
            anchor,
            location.latitude,
            location.longitude,
            delta_t,
            Horizon::SunriseSunset,
        )
        .map_err(model_error)
    }

    /// First sunset after `sunrise`, looked up on the next local day.
    fn following_sunset(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        tz: Tz,
        sunrise: &DateTime<Tz>,
    ) -> Result<Option<DateTime<Tz>>, ShadowFlipError> {
        let Some(next) = date.succ_opt() else {
            return Ok(None);
        };
        Ok(match self.horizon_events(next, location, tz)? {
            SunriseResult::RegularDay { sunset, .. } if sunset > *sunrise => {
                trace!("sunset for {} falls on {}: {}", date, next, sunset);
                Some(sunset)
            }
            _ => None,
        })
    }

    fn refraction(&self) -> Option<RefractionCorrection> {
        if self.config.refraction {
            Some(RefractionCorrection::standard())
        } else {
            None
        }
    }
}

impl SolarAzimuthModel for SpaModel {
    fn day_bounds(
        &self,
        date: NaiveDate,
        location: GeoPoint,
        tz: Tz,
    ) -> Result<DayBounds, ShadowFlipError> {
        Ok(match self.horizon_events(date, location, tz)? {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } if sunset > sunrise => DayBounds::Regular { sunrise, sunset },
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => {
                // sunset is the previous evening's, just after midnight
                let sunset = self
                    .following_sunset(date, location, tz, &sunrise)?
                    .unwrap_or(sunset);
                DayBounds::Regular { sunrise, sunset }
            }
            SunriseResult::AllDay { .. } => {
                debug!("polar day at {:?} on {}", location, date);
                DayBounds::PolarDay
            }
            SunriseResult::AllNight { .. } => {
                debug!("polar night at {:?} on {}", location, date);
                DayBounds::PolarNight
            }
        })
    }

    fn azimuth(&self, instant: &DateTime<Tz>, location: GeoPoint) -> Result<f64, ShadowFlipError> {
        let delta_t = self.delta_t(instant.year(), instant.month())?;
        let pos = spa::solar_position(
            *instant,
            location.latitude,
            location.longitude,
            self.config.elevation_m,
            delta_t,
            self.refraction(),
        )
        .map_err(model_error)?;
        Ok(normalize_angle(pos.azimuth()))
    }
}

fn model_error(err: impl std::fmt::Display) -> ShadowFlipError {
    ShadowFlipError::Model(err.to_string())
}
