//! Error types for the chronos-arima crate.

use std::fmt;

use chronos_series::SeriesError;

/// One of the six structural counts of a [`ModelOrder`](crate::ModelOrder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderTerm {
    /// Nonseasonal AR count `p`.
    Ar,
    /// Nonseasonal differencing degree `d`.
    Diff,
    /// Nonseasonal MA count `q`.
    Ma,
    /// Seasonal AR count `P`.
    SeasonalAr,
    /// Seasonal differencing degree `D`.
    SeasonalDiff,
    /// Seasonal MA count `Q`.
    SeasonalMa,
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OrderTerm::Ar => "p",
            OrderTerm::Diff => "d",
            OrderTerm::Ma => "q",
            OrderTerm::SeasonalAr => "P",
            OrderTerm::SeasonalDiff => "D",
            OrderTerm::SeasonalMa => "Q",
        };
        f.write_str(symbol)
    }
}

/// Error type for all fallible operations in the chronos-arima crate.
///
/// Every condition is detected when the order or model is constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaError {
    /// Returned when a term count or differencing degree is negative.
    #[error("invalid order: {term} = {value} is negative")]
    InvalidOrder {
        /// The offending component.
        term: OrderTerm,
        /// The value that was supplied.
        value: i64,
    },

    /// Returned when a count does not fit the signed 64-bit range used by
    /// serialized orders.
    #[error("invalid order: {term} = {value} is too large")]
    CountTooLarge {
        /// The offending component.
        term: OrderTerm,
        /// The value that was supplied.
        value: u64,
    },

    /// Returned when `p + q + P + Q + constant` does not fit in `usize`.
    #[error("invalid order: parameter count p + q + P + Q + constant overflows")]
    ParameterCountOverflow,

    /// Returned when the series is empty but the order requests a constant.
    #[error("series is empty, cannot seed the constant with its mean")]
    EmptySeries,

    /// Returned by [`ArimaModel::ensure_estimable()`](crate::ArimaModel::ensure_estimable)
    /// when the model has no AR/MA terms and no constant.
    #[error("model has no parameters to estimate")]
    DegenerateModel,

    /// Wraps an error from building the observed series.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}
