use thiserror::Error;

/// Which form field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Time,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Distance => write!(f, "distance"),
            Field::Time => write!(f, "time"),
        }
    }
}

/// Reasons a calculation request is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter valid numbers.")]
    InvalidNumber { field: Field, input: String },
    #[error("Time must be greater than zero.")]
    NonPositiveTime(f64),
    #[error("Average speed is too large to represent.")]
    SpeedOutOfRange { distance: f64, time: f64 },
}

pub type FormResult<T> = Result<T, FormError>;
