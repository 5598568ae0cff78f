//! # chronos-arima
//!
//! Seasonal ARIMA(p,d,q)(P,D,Q) model orders and the starting parameter
//! vector handed to an estimation routine.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ModelOrder::new(p, d, q, P, D, Q, constant)?"] --> C["ArimaModel::new(series, order)?"]
//!     B["TimeSeries::new(values)?"] --> C
//!     C --> D[".initial_parameters()"]
//!     D --> E[".ar() / .ma() / .seasonal_ar() / .seasonal_ma()"]
//!     D --> F[".intercept()"]
//! ```
//!
//! ## Parameter Layout
//!
//! | Slot | Length | Initial value |
//! |------|--------|---------------|
//! | AR | `p` | 0.0 |
//! | MA | `q` | 0.0 |
//! | Seasonal AR | `P` | 0.0 |
//! | Seasonal MA | `Q` | 0.0 |
//! | Constant | `0` or `1` | series mean |
//!
//! The constant is always last. Any estimator that consumes
//! [`InitialParameters`] must read the vector in this order.

mod error;
mod model;
mod order;
mod params;

pub use error::{ArimaError, OrderTerm};
pub use model::ArimaModel;
pub use order::ModelOrder;
pub use params::InitialParameters;
