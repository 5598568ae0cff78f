//! Init command: build a model from config and report its initial parameters.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chronos_arima::ArimaModel;

use crate::cli::InitArgs;
use crate::config::ChronosConfig;
use crate::convert;

/// Run the init pipeline.
pub fn run(args: InitArgs) -> Result<()> {
    let _cmd = info_span!("init").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: ChronosConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    info!(order = %config.order, "config loaded");

    // 2. Load observations
    let base_dir = args.config.parent().unwrap_or_else(|| Path::new("."));
    let series = convert::build_series(&config.series, base_dir, args.series.as_deref())?;
    info!(
        n_obs = series.len(),
        mean = ?series.mean(),
        sd = ?series.sd(),
        "observations loaded"
    );

    // 3. Build the model
    let model = ArimaModel::new(series, config.order)
        .with_context(|| format!("failed to build {}", config.order))?;
    if model.is_degenerate() {
        if args.strict || config.output.strict {
            model
                .ensure_estimable()
                .with_context(|| format!("{} rejected in strict mode", model.order()))?;
        }
        info!(order = %model.order(), "initial parameter vector is empty");
    }

    // 4. Write report
    let report = convert::build_report(&model);
    let mut json = if config.output.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialise report")?;
    json.push('\n');

    match args.output.or(config.output.path) {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("failed to write report to stdout")?;
        }
    }

    Ok(())
}
