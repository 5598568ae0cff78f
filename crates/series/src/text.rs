//! Plain-text observation files.
//!
//! One value per line. Blank lines and lines starting with `#` are skipped,
//! and anything after a `#` on a value line is treated as a comment.

use std::path::Path;

use tracing::debug;

use crate::error::SeriesError;
use crate::series::TimeSeries;

/// Parses observations from text, one value per line.
///
/// # Errors
///
/// Returns [`SeriesError::Parse`] with the one-based line number of the
/// first line that is not a number.
pub fn parse_observations(text: &str) -> Result<Vec<f64>, SeriesError> {
    let mut values = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let value = content.parse::<f64>().map_err(|_| SeriesError::Parse {
            line: i + 1,
            value: content.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Reads a [`TimeSeries`] from a text file.
///
/// # Errors
///
/// Returns [`SeriesError::Io`] if the file cannot be read, and the errors of
/// [`parse_observations`] and [`TimeSeries::new`] otherwise.
pub fn read_series(path: &Path) -> Result<TimeSeries, SeriesError> {
    let text = std::fs::read_to_string(path).map_err(|e| SeriesError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let series = text.parse::<TimeSeries>()?;
    debug!(path = %path.display(), n_obs = series.len(), "read observations");
    Ok(series)
}
