//! Average speed calculation for the input form.
//!
//! Turns the raw text of the distance and time fields into a
//! [`MeasurementRow`], rejecting text that is not a number and times that
//! are not strictly positive.

use super::errors::{Field, FormError, FormResult};
use super::models::MeasurementRow;

/// Parses form input and computes average speed.
///
/// Negative distances are accepted and produce a negative speed.
///
/// # Examples
///
/// ```
/// use formulaspeed::domain::{FormError, SpeedCalculator};
///
/// let row = SpeedCalculator::calculate("100", "2").unwrap();
/// assert_eq!(row.average_speed(), 50.0);
///
/// assert!(matches!(
///     SpeedCalculator::calculate("100", "0"),
///     Err(FormError::NonPositiveTime(_))
/// ));
/// ```
pub struct SpeedCalculator;

impl SpeedCalculator {
    /// Validates both fields and builds the resulting row.
    ///
    /// Distance is checked before time, so only the first bad field is
    /// reported.
    ///
    /// # Errors
    ///
    /// * [`FormError::InvalidNumber`] if either field is not a finite number
    /// * [`FormError::NonPositiveTime`] if time is zero or negative
    /// * [`FormError::SpeedOutOfRange`] if the quotient overflows `f64`
    pub fn calculate(distance: &str, time: &str) -> FormResult<MeasurementRow> {
        let distance = Self::parse_field(Field::Distance, distance)?;
        let time = Self::parse_field(Field::Time, time)?;

        if time <= 0.0 {
            return Err(FormError::NonPositiveTime(time));
        }

        let average_speed = distance / time;
        if !average_speed.is_finite() {
            return Err(FormError::SpeedOutOfRange { distance, time });
        }

        Ok(MeasurementRow::new(distance, time, average_speed))
    }

    /// Parses one field as a decimal number, ignoring surrounding whitespace.
    pub fn parse_field(field: Field, input: &str) -> FormResult<f64> {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FormError::InvalidNumber {
                field,
                input: input.to_string(),
            }),
        }
    }
}
