//! ARIMA model prepared for estimation.

use chronos_series::TimeSeries;
use tracing::{debug, warn};

use crate::error::ArimaError;
use crate::order::ModelOrder;
use crate::params::InitialParameters;

/// An ARIMA model bound to its observations, with a starting parameter
/// vector ready for an optimiser.
///
/// The model owns its series and order for its whole lifetime and exposes
/// them read-only. The initial parameters are computed once, in
/// [`ArimaModel::new()`].
///
/// # Example
///
/// ```
/// use chronos_arima::{ArimaModel, ModelOrder};
/// use chronos_series::TimeSeries;
///
/// let series = TimeSeries::new(vec![4.0, 5.0, 6.0]).unwrap();
/// let order = ModelOrder::new(1, 0, 1, 0, 0, 0, true).unwrap();
/// let model = ArimaModel::new(series, order).unwrap();
/// assert_eq!(model.initial_parameters().as_slice(), &[0.0, 0.0, 5.0]);
/// ```
#[derive(Clone, Debug)]
pub struct ArimaModel {
    observations: TimeSeries,
    order: ModelOrder,
    initial_parameters: InitialParameters,
}

impl ArimaModel {
    /// Binds `observations` to `order` and seeds the parameter vector.
    ///
    /// The series is moved into the model; clone it first to keep a copy.
    /// A model with no AR/MA terms and no constant is accepted with a
    /// warning, see [`ArimaModel::is_degenerate()`].
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::EmptySeries`] | `observations` is empty and `order` has a constant |
    #[tracing::instrument(skip_all, fields(order = %order, n_obs = observations.len()))]
    pub fn new(observations: TimeSeries, order: ModelOrder) -> Result<Self, ArimaError> {
        let initial_parameters = InitialParameters::seed(order, &observations)?;

        if initial_parameters.is_empty() {
            warn!("model has no AR/MA terms and no constant, nothing to estimate");
        } else {
            debug!(
                n_params = initial_parameters.len(),
                intercept = ?initial_parameters.intercept(),
                "seeded initial parameters"
            );
        }

        Ok(Self {
            observations,
            order,
            initial_parameters,
        })
    }

    /// Builds a model from raw observations.
    ///
    /// # Errors
    ///
    /// Returns [`ArimaError::Series`] if any observation is non-finite, and
    /// the errors of [`ArimaModel::new()`] otherwise.
    pub fn from_values(observations: &[f64], order: ModelOrder) -> Result<Self, ArimaError> {
        Self::new(TimeSeries::from_slice(observations)?, order)
    }

    /// Returns the observed series.
    pub fn observations(&self) -> &TimeSeries {
        &self.observations
    }

    /// Returns the model order.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// Returns the starting parameter vector.
    pub fn initial_parameters(&self) -> &InitialParameters {
        &self.initial_parameters
    }

    /// Returns `true` when the parameter vector is empty.
    pub fn is_degenerate(&self) -> bool {
        self.initial_parameters.is_empty()
    }

    /// Fails with [`ArimaError::DegenerateModel`] if there is nothing to
    /// estimate.
    pub fn ensure_estimable(&self) -> Result<(), ArimaError> {
        if self.is_degenerate() {
            return Err(ArimaError::DegenerateModel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronos_series::SeriesError;

    #[test]
    fn model_keeps_inputs() {
        let series = TimeSeries::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        let order = ModelOrder::new(1, 1, 0, 0, 0, 0, false).unwrap();
        let model = ArimaModel::new(series.clone(), order).unwrap();
        assert_eq!(model.observations(), &series);
        assert_eq!(model.order(), order);
        assert_eq!(model.initial_parameters().order(), order);
    }

    #[test]
    fn model_isolated_from_caller_series() {
        let mut raw = vec![2.0, 4.0];
        let order = ModelOrder::new(0, 0, 0, 0, 0, 0, true).unwrap();
        let model = ArimaModel::from_values(&raw, order).unwrap();
        raw[0] = 1000.0;
        assert_eq!(model.observations().values(), &[2.0, 4.0]);
        assert_eq!(model.initial_parameters().intercept(), Some(3.0));
    }

    #[test]
    fn empty_series_with_constant() {
        let order = ModelOrder::new(1, 0, 0, 0, 0, 0, true).unwrap();
        let err = ArimaModel::new(TimeSeries::default(), order).unwrap_err();
        assert_eq!(err, ArimaError::EmptySeries);
    }

    #[test]
    fn empty_series_without_constant() {
        let order = ModelOrder::new(1, 0, 1, 0, 0, 0, false).unwrap();
        let model = ArimaModel::new(TimeSeries::default(), order).unwrap();
        assert_eq!(model.initial_parameters().as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn non_finite_values_rejected() {
        let order = ModelOrder::new(1, 0, 0, 0, 0, 0, true).unwrap();
        let err = ArimaModel::from_values(&[1.0, f64::NAN], order).unwrap_err();
        assert_eq!(err, ArimaError::Series(SeriesError::NonFiniteData { index: 1 }));
    }

    #[test]
    fn degenerate_model_is_advisory() {
        let order = ModelOrder::new(0, 1, 0, 0, 0, 0, false).unwrap();
        let model = ArimaModel::from_values(&[1.0, 2.0], order).unwrap();
        assert!(model.is_degenerate());
        assert_eq!(model.ensure_estimable(), Err(ArimaError::DegenerateModel));
    }

    #[test]
    fn non_degenerate_is_estimable() {
        let order = ModelOrder::new(0, 0, 0, 0, 0, 0, true).unwrap();
        let model = ArimaModel::from_values(&[1.0, 2.0], order).unwrap();
        assert!(!model.is_degenerate());
        assert!(model.ensure_estimable().is_ok());
    }

    #[test]
    fn constant_seed_near_f64_max() {
        let order = ModelOrder::new(0, 0, 0, 0, 0, 0, true).unwrap();
        let model = ArimaModel::from_values(&[1.7e308, 1.7e308], order).unwrap();
        assert_eq!(model.initial_parameters().intercept(), Some(1.7e308));
    }
}
