use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::angles::{match_shadow_axis, shadow_axis, ANGLE_TOLERANCE_DEG};
use crate::calendar::{daylight_minutes, parse_iso_date, scan_len};
use crate::error::ShadowFlipError;
use crate::model::SolarAzimuthModel;
use crate::types::{DayBounds, DegenerateWindow, FlipResult, GeoPoint, NotFoundReason, ShadowFlip};

/// Earliest whole minute on `date` at which the sun lines up with the shadow axis.
pub fn find_shadow_flip_time<M>(
    model: &M,
    location: GeoPoint,
    facing_heading: f64,
    date: NaiveDate,
    tz: Tz,
) -> Result<FlipResult, ShadowFlipError>
where
    M: SolarAzimuthModel + ?Sized,
{
    if !facing_heading.is_finite() {
        return Err(ShadowFlipError::NonFiniteHeading);
    }
    let axis = shadow_axis(facing_heading);

    let (sunrise, sunset) = match model.day_bounds(date, location, tz)? {
        DayBounds::Regular { sunrise, sunset } => (sunrise, sunset),
        DayBounds::PolarDay => return Ok(degenerate(DegenerateWindow::PolarDay)),
        DayBounds::PolarNight => return Ok(degenerate(DegenerateWindow::PolarNight)),
    };
    if !is_usable_window(date, &sunrise, &sunset) {
        return Ok(degenerate(DegenerateWindow::Inverted));
    }

    let samples = scan_len(date, &sunrise, &sunset);
    for instant in daylight_minutes(date, sunrise, sunset).take(samples) {
        let azimuth = model.azimuth(&instant, location)?;
        if let Some(matched_bearing) = match_shadow_axis(azimuth, axis, ANGLE_TOLERANCE_DEG) {
            return Ok(FlipResult::Found(ShadowFlip {
                instant,
                azimuth,
                shadow_heading: axis.0,
                matched_bearing,
            }));
        }
    }
    Ok(FlipResult::NotFound(NotFoundReason::NoCrossing))
}

/// Same as [`find_shadow_flip_time`] with the date given as `YYYY-MM-DD`.
pub fn find_shadow_flip_time_iso<M>(
    model: &M,
    location: GeoPoint,
    facing_heading: f64,
    date: &str,
    tz: Tz,
) -> Result<FlipResult, ShadowFlipError>
where
    M: SolarAzimuthModel + ?Sized,
{
    let date = parse_iso_date(date)?;
    find_shadow_flip_time(model, location, facing_heading, date, tz)
}

// sunset may fall after local midnight; the scan stops at the end of `date`
fn is_usable_window(date: NaiveDate, sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> bool {
    sunrise < sunset && sunrise.date_naive() == date
}

fn degenerate(window: DegenerateWindow) -> FlipResult {
    FlipResult::NotFound(NotFoundReason::DegenerateDaylightWindow(window))
}
