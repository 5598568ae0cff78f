//! ARIMA model order (structural hyperparameters).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArimaError, OrderTerm};

/// The structural order of a seasonal ARIMA(p,d,q)(P,D,Q) model.
///
/// Holds the nonseasonal and seasonal AR/MA term counts, both differencing
/// degrees, and whether an intercept is included. The value is immutable:
/// there are no setters, and copies are plain `Copy` duplicates that share
/// nothing with the original.
///
/// The constant is stored as exactly `0` or `1` so it can be added directly
/// to term counts; see [`ModelOrder::n_params()`].
///
/// # Example
///
/// ```
/// use chronos_arima::ModelOrder;
///
/// let order = ModelOrder::new(1, 1, 1, 1, 0, 1, true).unwrap();
/// assert_eq!(order.sum_arma(), 4);
/// assert_eq!(order.n_params(), 5);
/// assert_eq!(order.to_string(), "ARIMA(1,1,1)(1,0,1) with constant");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "OrderRecord", try_from = "OrderRecord")]
pub struct ModelOrder {
    p: usize,
    d: usize,
    q: usize,
    seasonal_p: usize,
    seasonal_d: usize,
    seasonal_q: usize,
    constant: usize,
}

impl ModelOrder {
    /// Creates an order from nonnegative counts.
    ///
    /// Arguments follow the conventional `(p, d, q)(P, D, Q)` layout.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::CountTooLarge`] | a count exceeds `i64::MAX` |
    /// | [`ArimaError::ParameterCountOverflow`] | `p + q + P + Q + constant` overflows `usize` |
    pub fn new(
        p: usize,
        d: usize,
        q: usize,
        seasonal_p: usize,
        seasonal_d: usize,
        seasonal_q: usize,
        constant: bool,
    ) -> Result<Self, ArimaError> {
        let order = Self {
            p,
            d,
            q,
            seasonal_p,
            seasonal_d,
            seasonal_q,
            constant: usize::from(constant),
        };
        for (term, value) in order.terms() {
            if i64::try_from(value).is_err() {
                return Err(ArimaError::CountTooLarge {
                    term,
                    value: value as u64,
                });
            }
        }
        [p, q, seasonal_p, seasonal_q]
            .into_iter()
            .try_fold(order.constant, usize::checked_add)
            .ok_or(ArimaError::ParameterCountOverflow)?;
        Ok(order)
    }

    /// Creates an order from signed counts, as read from configuration files
    /// or foreign callers.
    ///
    /// # Errors
    ///
    /// Returns [`ArimaError::InvalidOrder`] naming the first negative
    /// component, checked in the order `p, d, q, P, D, Q`, and the errors of
    /// [`ModelOrder::new()`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use chronos_arima::{ArimaError, ModelOrder, OrderTerm};
    ///
    /// let err = ModelOrder::from_signed(1, 0, -1, 0, 0, 0, false).unwrap_err();
    /// assert_eq!(err, ArimaError::InvalidOrder { term: OrderTerm::Ma, value: -1 });
    /// ```
    pub fn from_signed(
        p: i64,
        d: i64,
        q: i64,
        seasonal_p: i64,
        seasonal_d: i64,
        seasonal_q: i64,
        constant: bool,
    ) -> Result<Self, ArimaError> {
        Self::new(
            count(OrderTerm::Ar, p)?,
            count(OrderTerm::Diff, d)?,
            count(OrderTerm::Ma, q)?,
            count(OrderTerm::SeasonalAr, seasonal_p)?,
            count(OrderTerm::SeasonalDiff, seasonal_d)?,
            count(OrderTerm::SeasonalMa, seasonal_q)?,
            constant,
        )
    }

    fn terms(&self) -> [(OrderTerm, usize); 6] {
        [
            (OrderTerm::Ar, self.p),
            (OrderTerm::Diff, self.d),
            (OrderTerm::Ma, self.q),
            (OrderTerm::SeasonalAr, self.seasonal_p),
            (OrderTerm::SeasonalDiff, self.seasonal_d),
            (OrderTerm::SeasonalMa, self.seasonal_q),
        ]
    }

    /// Returns the nonseasonal AR count (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the nonseasonal differencing degree (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the nonseasonal MA count (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the seasonal AR count (`P`).
    pub fn seasonal_p(&self) -> usize {
        self.seasonal_p
    }

    /// Returns the seasonal differencing degree (`D`).
    pub fn seasonal_d(&self) -> usize {
        self.seasonal_d
    }

    /// Returns the seasonal MA count (`Q`).
    pub fn seasonal_q(&self) -> usize {
        self.seasonal_q
    }

    /// Returns `1` if the model includes a constant, `0` otherwise.
    pub fn constant(&self) -> usize {
        self.constant
    }

    /// Returns `true` if the model includes a constant.
    pub fn has_constant(&self) -> bool {
        self.constant == 1
    }

    /// Total number of nonseasonal and seasonal ARMA coefficients,
    /// `p + q + P + Q`. Differencing degrees do not contribute.
    ///
    /// Cannot overflow: [`ModelOrder::new()`] rejects orders whose
    /// parameter count does not fit in `usize`.
    pub fn sum_arma(&self) -> usize {
        self.p + self.q + self.seasonal_p + self.seasonal_q
    }

    /// Length of the parameter vector: `sum_arma() + constant()`.
    pub fn n_params(&self) -> usize {
        self.sum_arma() + self.constant
    }
}

fn count(term: OrderTerm, value: i64) -> Result<usize, ArimaError> {
    if value < 0 {
        return Err(ArimaError::InvalidOrder { term, value });
    }
    usize::try_from(value).map_err(|_| ArimaError::CountTooLarge {
        term,
        value: value as u64,
    })
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ARIMA({},{},{})({},{},{})",
            self.p, self.d, self.q, self.seasonal_p, self.seasonal_d, self.seasonal_q
        )?;
        if self.has_constant() {
            f.write_str(" with constant")?;
        }
        Ok(())
    }
}

/// Serialized form of a [`ModelOrder`]. Counts are signed so that negative
/// values in input files surface as [`ArimaError::InvalidOrder`] rather than
/// as opaque integer-range failures.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrderRecord {
    #[serde(default)]
    p: i64,
    #[serde(default)]
    d: i64,
    #[serde(default)]
    q: i64,
    #[serde(default, rename = "P")]
    seasonal_p: i64,
    #[serde(default, rename = "D")]
    seasonal_d: i64,
    #[serde(default, rename = "Q")]
    seasonal_q: i64,
    #[serde(default)]
    constant: bool,
}

impl From<ModelOrder> for OrderRecord {
    // Lossless: every count is at most i64::MAX by construction.
    fn from(order: ModelOrder) -> Self {
        Self {
            p: order.p as i64,
            d: order.d as i64,
            q: order.q as i64,
            seasonal_p: order.seasonal_p as i64,
            seasonal_d: order.seasonal_d as i64,
            seasonal_q: order.seasonal_q as i64,
            constant: order.has_constant(),
        }
    }
}

impl TryFrom<OrderRecord> for ModelOrder {
    type Error = ArimaError;

    fn try_from(r: OrderRecord) -> Result<Self, Self::Error> {
        ModelOrder::from_signed(
            r.p,
            r.d,
            r.q,
            r.seasonal_p,
            r.seasonal_d,
            r.seasonal_q,
            r.constant,
        )
    }
}
