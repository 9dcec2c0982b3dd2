//! A growable series of temperature readings.
//!
//! [`TemperatureSeries`] stores readings in insertion order and offers
//! aggregate statistics (mean, population deviation, extremes), nearest-value
//! queries, range filters, an in-place sort and a reset. Every reading must be
//! at least [`MIN_TEMPERATURE`]; batches containing an invalid reading are
//! rejected as a whole before the series is touched.
//!
//! ```
//! use tempseries::{SeriesError, TemperatureSeries};
//!
//! let mut series = TemperatureSeries::with_temps(&[10.0, -5.0, 3.0])?;
//! assert_eq!(series.min()?, -5.0);
//! assert_eq!(series.find_temp_closest_to_zero()?, 3.0);
//!
//! assert!(series.add_temps(&[-1000.0]).is_err());
//! assert_eq!(series.len(), 3);
//! # Ok::<(), SeriesError>(())
//! ```

mod error;
mod series;
mod stats;

pub use error::SeriesError;
pub use series::TemperatureSeries;
pub use stats::SummaryStatistics;

/// Absolute physical lower bound for a reading, in degrees Celsius.
pub const MIN_TEMPERATURE: f64 = -273.0;

/// Number of slots pre-allocated by an empty series.
pub const INITIAL_CAPACITY: usize = 10;
