use crate::error::SeriesError;
use crate::stats::{
    SummaryStatistics, compute_closest, compute_max, compute_mean, compute_min, compute_var,
};
use crate::{INITIAL_CAPACITY, MIN_TEMPERATURE};

/// Growable, ordered series of temperature readings.
///
/// Readings are kept in insertion order until [`sort_temps`](Self::sort_temps)
/// is called. Every stored reading is at least [`MIN_TEMPERATURE`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    temps: Vec<f64>,
}

impl TemperatureSeries {
    /// Create an empty series with [`INITIAL_CAPACITY`] pre-allocated slots.
    pub fn new() -> Self {
        Self {
            temps: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Create a series holding a copy of `temps`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidTemperature`] if any reading is below
    /// [`MIN_TEMPERATURE`]; no series is built in that case.
    pub fn with_temps(temps: &[f64]) -> Result<Self, SeriesError> {
        check_temps(temps)?;

        let mut vec = Vec::with_capacity(2 * temps.len());
        vec.extend_from_slice(temps);
        log::debug!("created series with {} temps", vec.len());

        Ok(Self { temps: vec })
    }

    pub fn len(&self) -> usize {
        self.temps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temps.is_empty()
    }

    /// Copy of the current readings, in series order.
    pub fn temps(&self) -> Vec<f64> {
        self.temps.clone()
    }

    /// Arithmetic mean of the readings.
    pub fn average(&self) -> Result<f64, SeriesError> {
        compute_mean(&self.temps)
    }

    /// Population standard deviation of the readings.
    pub fn deviation(&self) -> Result<f64, SeriesError> {
        Ok(compute_var(&self.temps)?.sqrt())
    }

    pub fn min(&self) -> Result<f64, SeriesError> {
        compute_min(&self.temps)
    }

    pub fn max(&self) -> Result<f64, SeriesError> {
        compute_max(&self.temps)
    }

    /// Reading with the smallest absolute value.
    ///
    /// On a tie (e.g. `-2.0` and `2.0`) the positive reading is returned.
    pub fn find_temp_closest_to_zero(&self) -> Result<f64, SeriesError> {
        compute_closest(&self.temps, 0.0)
    }

    /// Reading closest to `target`, preferring the larger reading on a tie.
    pub fn find_temp_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        compute_closest(&self.temps, target)
    }

    /// Readings strictly less than `bound`, in series order.
    pub fn find_temps_less_than(&self, bound: f64) -> Vec<f64> {
        self.filter_temps(|temp| temp < bound)
    }

    /// Readings strictly greater than `bound`, in series order.
    pub fn find_temps_greater_than(&self, bound: f64) -> Vec<f64> {
        self.filter_temps(|temp| temp > bound)
    }

    /// Readings in the closed interval `[low, high]`, in series order.
    ///
    /// Empty if `low > high`.
    pub fn find_temps_in_range(&self, low: f64, high: f64) -> Vec<f64> {
        self.filter_temps(|temp| (low..=high).contains(&temp))
    }

    /// Average, deviation, minimum and maximum of the readings.
    ///
    /// Each value matches the corresponding individual query exactly.
    pub fn summary_statistics(&self) -> Result<SummaryStatistics, SeriesError> {
        Ok(SummaryStatistics {
            average: self.average()?,
            deviation: self.deviation()?,
            min: self.min()?,
            max: self.max()?,
        })
    }

    /// Append `new_temps` and return the new number of readings.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidTemperature`] if any reading is below
    /// [`MIN_TEMPERATURE`]. The whole batch is rejected and the series is left
    /// unchanged.
    pub fn add_temps(&mut self, new_temps: &[f64]) -> Result<usize, SeriesError> {
        if let Err(error) = check_temps(new_temps) {
            log::warn!("rejected batch of {} temps: {error}", new_temps.len());
            return Err(error);
        }

        self.temps.reserve(new_temps.len());
        self.temps.extend_from_slice(new_temps);
        log::debug!(
            "added {} temps, series now holds {}",
            new_temps.len(),
            self.temps.len()
        );

        Ok(self.temps.len())
    }

    /// Discard all readings and release any storage grown past the default.
    pub fn reset(&mut self) {
        self.temps = Vec::with_capacity(INITIAL_CAPACITY);
        log::debug!("reset series");
    }

    /// Sort the readings in non-decreasing order, in place.
    pub fn sort_temps(&mut self) {
        self.temps.sort_by(f64::total_cmp);
        log::debug!("sorted {} temps", self.temps.len());
    }

    fn filter_temps<F>(&self, pred: F) -> Vec<f64>
    where
        F: Fn(f64) -> bool,
    {
        self.temps.iter().copied().filter(|&temp| pred(temp)).collect()
    }
}

impl Default for TemperatureSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[f64]> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(temps: &[f64]) -> Result<Self, Self::Error> {
        Self::with_temps(temps)
    }
}

impl TryFrom<Vec<f64>> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(temps: Vec<f64>) -> Result<Self, Self::Error> {
        Self::with_temps(&temps)
    }
}

// NaN fails the range check as well, so it never enters a series.
fn check_temps(temps: &[f64]) -> Result<(), SeriesError> {
    match temps
        .iter()
        .position(|temp| !(MIN_TEMPERATURE..).contains(temp))
    {
        Some(idx) => Err(SeriesError::InvalidTemperature {
            idx,
            temp: temps[idx],
        }),
        None => Ok(()),
    }
}
