pub mod angles;
pub mod calendar;
pub mod error;
pub mod model;
pub mod search;
pub mod types;

pub use angles::{
    angular_distance, match_shadow_axis, normalize_angle, shadow_axis, shadow_heading,
    ANGLE_TOLERANCE_DEG, FULL_TURN, HALF_TURN, QUARTER_TURN,
};

pub use calendar::{
    daylight_minutes, local_instant, local_noon, parse_iso_date, scan_hours,
    scan_len,
};

pub use error::ShadowFlipError;

pub use model::{SolarAzimuthModel, SpaModel};

pub use search::{find_shadow_flip_time, find_shadow_flip_time_iso};

pub use types::{
    DayBounds, DegenerateWindow, FlipResult, GeoPoint, NotFoundReason, ShadowFlip, SpaModelConfig,
};
