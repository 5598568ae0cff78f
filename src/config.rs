use std::path::PathBuf;

use serde::Deserialize;

use chronos_arima::ModelOrder;

/// Top-level chronos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronosConfig {
    /// Model order. Negative counts are rejected while parsing.
    pub order: ModelOrder,

    /// Observation source.
    #[serde(default)]
    pub series: SeriesToml,

    /// Report settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// Observation source: exactly one of `path` or `values` should be set.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SeriesToml {
    /// Text file with one observation per line, relative to the config file.
    pub path: Option<PathBuf>,
    /// Inline observations.
    pub values: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default)]
    pub strict: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: None,
            pretty: default_true(),
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}
