use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Coordinate { latitude, longitude })
    }

    // Only for compile-time constants that are known to be in range.
    pub(crate) const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
    #[error("latitude and longitude must be finite numbers")]
    NotFinite,
}
