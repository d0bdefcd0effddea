use thiserror::Error;

/// Reservation errors
///
/// Every failure propagates to the caller as a typed error; nothing is
/// logged-and-defaulted. "Already booked" is not an error — booking reports
/// it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Restaurant name must not be empty")]
    EmptyRestaurantName,

    #[error("Table count must be at least 1, got {0}")]
    InvalidTableCount(usize),

    #[error("Table number {table_number} out of range: \"{restaurant}\" has {table_count} tables")]
    TableOutOfRange {
        restaurant: String,
        table_number: usize,
        table_count: usize,
    },

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),
}

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed a rejected value (empty name, zero table count,
    /// out-of-range table number)
    InvalidArgument,
    /// Named restaurant does not exist
    NotFound,
}

impl ReservationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyRestaurantName
            | Self::InvalidTableCount(_)
            | Self::TableOutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::RestaurantNotFound(_) => ErrorKind::NotFound,
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;
