//! Owned univariate time series.

use std::str::FromStr;

use crate::error::SeriesError;
use crate::text;

/// An ordered sequence of finite real-valued observations.
///
/// The series owns its data. [`Clone`] produces a deep, independent copy, and
/// no method mutates the observations in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    observations: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series from owned observations.
    ///
    /// An empty series is valid; statistics that need data return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonFiniteData`] for the first NaN or infinite
    /// observation.
    ///
    /// # Example
    ///
    /// ```
    /// use chronos_series::TimeSeries;
    ///
    /// let series = TimeSeries::new(vec![4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series.mean(), Some(5.0));
    /// ```
    pub fn new(observations: Vec<f64>) -> Result<Self, SeriesError> {
        if let Some(index) = observations.iter().position(|x| !x.is_finite()) {
            return Err(SeriesError::NonFiniteData { index });
        }
        Ok(Self { observations })
    }

    /// Creates a series by copying a slice.
    pub fn from_slice(observations: &[f64]) -> Result<Self, SeriesError> {
        Self::new(observations.to_vec())
    }

    /// Returns the observations in time order.
    pub fn values(&self) -> &[f64] {
        &self.observations
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Arithmetic mean of the observations, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        chronos_stats::mean(&self.observations)
    }

    /// Sample standard deviation, `None` with fewer than two observations.
    pub fn sd(&self) -> Option<f64> {
        chronos_stats::sd(&self.observations)
    }

    /// Consumes the series and returns the observations.
    pub fn into_values(self) -> Vec<f64> {
        self.observations
    }
}

impl FromStr for TimeSeries {
    type Err = SeriesError;

    /// Parses one observation per line; see [`parse_observations`](crate::parse_observations).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(text::parse_observations(s)?)
    }
}

impl TryFrom<Vec<f64>> for TimeSeries {
    type Error = SeriesError;

    fn try_from(observations: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(observations)
    }
}
