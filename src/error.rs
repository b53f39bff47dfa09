use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShadowFlipError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("facing heading must be a finite number of degrees")]
    NonFiniteHeading,

    #[error("latitude {0} out of range (-90 to 90)")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range (-180 to 180)")]
    LongitudeOutOfRange(f64),

    #[error("solar position model failed: {0}")]
    Model(String),
}

impl ShadowFlipError {
    /// True for errors caused by caller-supplied values rather than the model.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, ShadowFlipError::Model(_))
    }
}
