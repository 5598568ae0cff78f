//! Flat parameter vector shared with estimation routines.
//!
//! Layout is fixed as
//!
//! ```text
//! [ ar(p) | ma(q) | seasonal_ar(P) | seasonal_ma(Q) | constant? ]
//! ```
//!
//! The constant, when present, is always the final element.

use std::ops::Range;

use chronos_series::TimeSeries;

use crate::error::ArimaError;
use crate::order::ModelOrder;

/// Starting point for optimisation, derived from a [`ModelOrder`] and a
/// series.
///
/// The seed is read-only. An estimation routine takes its own working copy
/// with [`InitialParameters::to_vec()`] before iterating.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialParameters {
    order: ModelOrder,
    values: Vec<f64>,
}

impl InitialParameters {
    /// Builds the seed vector for `order`.
    ///
    /// Every AR and MA slot starts at `0.0`. When the order includes a
    /// constant, the final slot is the mean of `observations`; without a
    /// constant the series is not inspected at all.
    ///
    /// # Errors
    ///
    /// Returns [`ArimaError::EmptySeries`] if a constant is requested and
    /// `observations` is empty.
    pub fn seed(order: ModelOrder, observations: &TimeSeries) -> Result<Self, ArimaError> {
        let mut values = vec![0.0; order.n_params()];
        if order.has_constant() {
            let mean = observations.mean().ok_or(ArimaError::EmptySeries)?;
            if let Some(last) = values.last_mut() {
                *last = mean;
            }
        }
        Ok(Self { order, values })
    }

    /// Returns the order this vector was laid out for.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// Returns the full flat vector.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the vector length, equal to `order().n_params()`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there is nothing to estimate.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an owned working copy for an optimiser to mutate.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Consumes the seed and returns the flat vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Nonseasonal AR coefficients.
    pub fn ar(&self) -> &[f64] {
        &self.values[self.block(0)]
    }

    /// Nonseasonal MA coefficients.
    pub fn ma(&self) -> &[f64] {
        &self.values[self.block(1)]
    }

    /// Seasonal AR coefficients.
    pub fn seasonal_ar(&self) -> &[f64] {
        &self.values[self.block(2)]
    }

    /// Seasonal MA coefficients.
    pub fn seasonal_ma(&self) -> &[f64] {
        &self.values[self.block(3)]
    }

    /// All ARMA coefficients, i.e. every slot except the constant.
    pub fn coefficients(&self) -> &[f64] {
        &self.values[..self.order.sum_arma()]
    }

    /// The constant term, if the order includes one.
    pub fn intercept(&self) -> Option<f64> {
        if self.order.has_constant() {
            self.values.last().copied()
        } else {
            None
        }
    }

    /// Index range of block `k` in `[ar, ma, seasonal_ar, seasonal_ma]`.
    fn block(&self, k: usize) -> Range<usize> {
        let o = &self.order;
        let sizes = [o.p(), o.q(), o.seasonal_p(), o.seasonal_q()];
        let start: usize = sizes[..k].iter().sum();
        start..start + sizes[k]
    }
}
