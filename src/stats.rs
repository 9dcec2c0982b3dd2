use crate::error::SeriesError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Snapshot of the aggregate statistics of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub average: f64,
    pub deviation: f64,
    pub min: f64,
    pub max: f64,
}

pub(crate) fn compute_mean(temps: &[f64]) -> Result<f64, SeriesError> {
    if temps.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    Ok(temps.iter().sum::<f64>() / temps.len() as f64)
}

/// Population variance (divisor is the number of values).
///
/// Values are shifted by the first one before the two-pass sum, so a
/// constant series has a variance of exactly zero.
pub(crate) fn compute_var(temps: &[f64]) -> Result<f64, SeriesError> {
    let shift = *temps.first().ok_or(SeriesError::EmptySeries)?;
    let n_temps = temps.len() as f64;
    let diffs = || temps.iter().map(move |&temp| temp - shift);
    let mean = diffs().sum::<f64>() / n_temps;
    let diff_2_sum = diffs().map(|diff| (diff - mean).powi(2)).sum::<f64>();
    Ok(diff_2_sum / n_temps)
}

pub(crate) fn compute_min(temps: &[f64]) -> Result<f64, SeriesError> {
    let (&first, rest) = temps.split_first().ok_or(SeriesError::EmptySeries)?;
    Ok(rest
        .iter()
        .fold(first, |min, &temp| if temp < min { temp } else { min }))
}

pub(crate) fn compute_max(temps: &[f64]) -> Result<f64, SeriesError> {
    let (&first, rest) = temps.split_first().ok_or(SeriesError::EmptySeries)?;
    Ok(rest
        .iter()
        .fold(first, |max, &temp| if temp > max { temp } else { max }))
}

/// Find the value closest to `target`, preferring the larger value on an exact tie.
pub(crate) fn compute_closest(temps: &[f64], target: f64) -> Result<f64, SeriesError> {
    let (&first, rest) = temps.split_first().ok_or(SeriesError::EmptySeries)?;
    Ok(rest.iter().fold(first, |closest, &temp| {
        match cmp_closeness(temp, closest, target) {
            Ordering::Less => temp,
            _ => closest,
        }
    }))
}

// Less means `a` is the better match for `target` than `b`.
fn cmp_closeness(a: f64, b: f64, target: f64) -> Ordering {
    let dist_a = (a - target).abs();
    let dist_b = (b - target).abs();
    if dist_a < dist_b {
        Ordering::Less
    } else if dist_a > dist_b {
        Ordering::Greater
    } else if a > b {
        Ordering::Less
    } else if a < b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closeness_tie_prefers_larger_value() {
        assert_eq!(cmp_closeness(2.0, -2.0, 0.0), Ordering::Less);
        assert_eq!(cmp_closeness(-2.0, 2.0, 0.0), Ordering::Greater);
        assert_eq!(cmp_closeness(1.0, 1.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_closeness(7.0, 3.0, 5.0), Ordering::Less);
    }

    #[test]
    fn empty_slice_is_rejected() {
        assert_eq!(compute_mean(&[]), Err(SeriesError::EmptySeries));
        assert_eq!(compute_var(&[]), Err(SeriesError::EmptySeries));
        assert_eq!(compute_min(&[]), Err(SeriesError::EmptySeries));
        assert_eq!(compute_max(&[]), Err(SeriesError::EmptySeries));
        assert_eq!(compute_closest(&[], 1.0), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn variance_uses_population_divisor() {
        let var = compute_var(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((var - 4.0).abs() < 1e-12);
    }

    #[test]
    fn variance_of_constant_values_is_exactly_zero() {
        assert_eq!(compute_var(&[0.1; 3]), Ok(0.0));
        assert_eq!(compute_var(&[-273.0; 7]), Ok(0.0));
    }
}
