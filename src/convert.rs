//! Bridges TOML configuration structs onto library configs.

use anyhow::{Result, anyhow};

use boreas_classify::Scheme;
use boreas_grid::LoadConfig;

use crate::config::{DatasetToml, SchemeToml, YearsToml};
use crate::export::Compression;

/// Resolves the configured class count into a scheme.
pub fn build_scheme(toml: &SchemeToml) -> Result<Scheme> {
    Scheme::from_levels(toml.levels)
        .ok_or_else(|| anyhow!("unsupported scheme levels {}: use 3 or 5", toml.levels))
}

/// Builds the loader config for one dataset declaration.
pub fn build_load_config(dataset: &DatasetToml, years: Option<&YearsToml>) -> LoadConfig {
    let config = LoadConfig::new(dataset.variable.clone());
    match years {
        Some(window) => config.with_year_range(window.start, window.end),
        None => config,
    }
}

/// Parses the configured compression name.
pub fn build_compression(name: &str) -> Result<Compression> {
    match name {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => Err(anyhow!(
            "unknown compression '{other}': use none, snappy, or zstd"
        )),
    }
}
