//! The `query` subcommand: resolve a coordinate against every configured
//! dataset and print per-dataset results as JSON lines.

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use boreas_engine::QueryEngine;
use boreas_grid::GridDataset;

use crate::cli::QueryArgs;
use crate::config;
use crate::convert;

/// Run a point query (or a per-year history) and print the results.
pub fn run(args: &QueryArgs) -> Result<()> {
    let config = config::load_config(&args.config)?;
    let scheme = convert::build_scheme(&config.scheme)?;

    let mut engine = QueryEngine::new(scheme);
    for dataset in &config.datasets {
        if let Some(only) = &args.dataset {
            if only != &dataset.name {
                continue;
            }
        }
        let load_config = convert::build_load_config(dataset, config.years.as_ref());
        match GridDataset::load(&dataset.path, &load_config) {
            Ok(loaded) => engine.insert_dataset(dataset.name.clone(), loaded),
            Err(e) => warn!(
                dataset = %dataset.name,
                path = %dataset.path.display(),
                error = %e,
                "skipping dataset that failed to load"
            ),
        }
    }
    if engine.dataset_names().is_empty() {
        bail!("no datasets loaded; check [[dataset]] entries and --dataset");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.history {
        let Some(name) = args.dataset.as_deref() else {
            bail!("--history requires --dataset");
        };
        let history = engine
            .query_history(name, args.lat, args.lon)
            .with_context(|| format!("history query failed for dataset '{name}'"))?;
        info!(dataset = name, n_years = history.len(), "resolved history");
        for result in &history {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
        }
        return Ok(());
    }

    let Some(year) = args.year else {
        bail!("--year is required without --history");
    };

    // Per-dataset errors become error entries; partial success is success.
    let results = engine.query(year, args.lat, args.lon);
    for (name, outcome) in &results {
        match outcome {
            Ok(result) => writeln!(out, "{}", serde_json::to_string(result)?)?,
            Err(e) => {
                let entry = serde_json::json!({ "dataset": name, "error": e.to_string() });
                writeln!(out, "{entry}")?;
            }
        }
    }
    Ok(())
}
