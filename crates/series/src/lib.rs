//! # chronos-series
//!
//! Owned, validated univariate observations for the chronos model crates.
//!
//! A [`TimeSeries`] is an ordered sequence of finite `f64` values. Models
//! take a series by value, so a caller who keeps using its data clones it
//! first, which is a deep copy.

mod error;
mod series;
mod text;

pub use error::SeriesError;
pub use series::TimeSeries;
pub use text::{parse_observations, read_series};
