//! Error types for temperature series operations.

use crate::MIN_TEMPERATURE;

/// Error returned by [`TemperatureSeries`](crate::TemperatureSeries) operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// An aggregate query was made on a series with no readings.
    #[error("temperature series is empty")]
    EmptySeries,

    /// A candidate reading is below [`MIN_TEMPERATURE`] (or is NaN).
    #[error("temperature {temp} at index {idx} is below the minimum of {min}", min = MIN_TEMPERATURE)]
    InvalidTemperature { idx: usize, temp: f64 },
}
