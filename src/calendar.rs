use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::ShadowFlipError;

pub const MINUTES_PER_HOUR: u32 = 60;

pub fn parse_iso_date(date: &str) -> Result<NaiveDate, ShadowFlipError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ShadowFlipError::InvalidDate(date.to_string()))
}

/// Wall-clock `hour:minute` on `date` in `tz`. Times skipped by a DST jump
/// have no instant; repeated times resolve to the earlier one.
pub fn local_instant(date: NaiveDate, hour: u32, minute: u32, tz: &Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, minute, 0)?;
    tz.from_local_datetime(&naive).earliest()
}

/// Anchor used when asking a model about a whole day.
pub fn local_noon(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    local_instant(date, 12, 0, tz).or_else(|| local_instant(date, 0, 0, tz))
}

/// Local hours scanned on `date`. A sunset after local midnight ends the scan
/// at 23:59 of `date`.
pub fn scan_hours(date: NaiveDate, sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> RangeInclusive<u32> {
    let last = if sunset.date_naive() > date { 23 } else { sunset.hour() };
    sunrise.hour()..=last
}

/// Upper bound on samples for a window, `(last hour - sunrise hour + 1) * 60`.
pub fn scan_len(date: NaiveDate, sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> usize {
    scan_hours(date, sunrise, sunset).count() * MINUTES_PER_HOUR as usize
}

/// One-minute samples over [`scan_hours`], in chronological order, keeping
/// only those inside `[sunrise, sunset]`.
pub fn daylight_minutes(
    date: NaiveDate,
    sunrise: DateTime<Tz>,
    sunset: DateTime<Tz>,
) -> impl Iterator<Item = DateTime<Tz>> {
    let tz = sunrise.timezone();
    scan_hours(date, &sunrise, &sunset)
        .flat_map(|hour| (0..MINUTES_PER_HOUR).map(move |minute| (hour, minute)))
        .filter_map(move |(hour, minute)| local_instant(date, hour, minute, &tz))
        .filter(move |t| *t >= sunrise && *t <= sunset)
}
