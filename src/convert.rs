//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use chronos_arima::{ArimaModel, ModelOrder};
use chronos_series::{TimeSeries, read_series};

use crate::config::SeriesToml;

/// Builds the observed series from the `[series]` table.
///
/// `override_path` (from `--series`) wins over the config. Relative config
/// paths are resolved against `base_dir`, the directory of the config file.
pub fn build_series(
    series: &SeriesToml,
    base_dir: &Path,
    override_path: Option<&Path>,
) -> Result<TimeSeries> {
    if let Some(path) = override_path {
        return read_series(path)
            .with_context(|| format!("failed to load series: {}", path.display()));
    }
    match (&series.path, &series.values) {
        (Some(path), None) => {
            let resolved = resolve(base_dir, path);
            read_series(&resolved)
                .with_context(|| format!("failed to load series: {}", resolved.display()))
        }
        (None, Some(values)) => {
            TimeSeries::from_slice(values).context("invalid inline [series].values")
        }
        (Some(_), Some(_)) => {
            bail!("[series] must have exactly one of path or values, got both")
        }
        (None, None) => {
            bail!("no series: set [series].path or [series].values in config, or use --series")
        }
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// JSON report of a prepared model.
#[derive(Debug, Serialize)]
pub struct InitReport<'a> {
    pub model: String,
    pub order: ModelOrder,
    pub n_obs: usize,
    pub n_params: usize,
    pub ar: &'a [f64],
    pub ma: &'a [f64],
    pub seasonal_ar: &'a [f64],
    pub seasonal_ma: &'a [f64],
    pub constant: Option<f64>,
    pub parameters: &'a [f64],
}

/// Builds the report for `model`, borrowing its parameter blocks.
pub fn build_report(model: &ArimaModel) -> InitReport<'_> {
    let params = model.initial_parameters();
    InitReport {
        model: model.order().to_string(),
        order: model.order(),
        n_obs: model.observations().len(),
        n_params: params.len(),
        ar: params.ar(),
        ma: params.ma(),
        seasonal_ar: params.seasonal_ar(),
        seasonal_ma: params.seasonal_ma(),
        constant: params.intercept(),
        parameters: params.as_slice(),
    }
}
