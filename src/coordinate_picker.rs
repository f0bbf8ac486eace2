use crate::domain::{Coordinate, CoordinateError};
use thiserror::Error;

/// An interactive flow, e.g. a map, that lets the user choose a coordinate.
pub trait CoordinatePicker {
    /// Returns `None` when the user cancelled.
    fn pick(&mut self, current: Option<Coordinate>) -> Option<Coordinate>;
}

/// Parses free-form latitude and longitude text as typed into the manual entry fields.
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate, CoordinateInputError> {
    let (latitude, longitude) = parse_degrees(latitude, longitude)?;
    Ok(Coordinate::new(latitude, longitude)?)
}

/// Parses both fields as decimal numbers without checking their range.
pub fn parse_degrees(latitude: &str, longitude: &str) -> Result<(f64, f64), CoordinateInputError> {
    let latitude = latitude.trim().parse().map_err(|_| CoordinateInputError::InvalidInput)?;
    let longitude = longitude.trim().parse().map_err(|_| CoordinateInputError::InvalidInput)?;
    Ok((latitude, longitude))
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateInputError {
    #[error("Please enter valid latitude and longitude.")]
    InvalidInput,
    #[error(transparent)]
    OutOfRange(#[from] CoordinateError),
}
