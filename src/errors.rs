use snafu::prelude::*;

/// # controle query errors
/// every error is raised while validating a query, before any time is calculated.
#[derive(Debug, Snafu, Clone, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("invalid controle distance {distance} km, expected a finite non-negative number"))]
    InvalidDistance { distance: f64 },

    #[snafu(display("unsupported brevet distance {distance} km"))]
    InvalidBrevetDistance { distance: f64 },

    #[snafu(display("invalid start time {value:?}"))]
    InvalidStartTime { value: String },
}

impl Error {
    /// short machine readable name used in api responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidDistance { .. } => "invalid_distance",
            Error::InvalidBrevetDistance { .. } => "invalid_brevet_distance",
            Error::InvalidStartTime { .. } => "invalid_start_time",
        }
    }
}

pub type CustomResult<T> = Result<T, Error>;
