use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Boreas configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoreasConfig {
    /// Classification scheme settings.
    #[serde(default)]
    pub scheme: SchemeToml,

    /// Optional inclusive year window applied at load.
    #[serde(default)]
    pub years: Option<YearsToml>,

    /// Hazard datasets to register, one `[[dataset]]` block each.
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetToml>,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

/// Reads and parses a TOML configuration file.
pub fn load_config(path: &Path) -> Result<BoreasConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeToml {
    /// Number of ordinal classes: 3 (Low/Medium/High) or 5 (quintiles).
    #[serde(default = "default_levels")]
    pub levels: u8,
}

impl Default for SchemeToml {
    fn default() -> Self {
        Self {
            levels: default_levels(),
        }
    }
}

fn default_levels() -> u8 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearsToml {
    pub start: i32,
    pub end: i32,
}

/// One hazard dataset declaration.
///
/// `variable` is explicit: the loader never guesses which data variable in
/// the file carries the hazard.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    pub name: String,
    pub path: PathBuf,
    pub variable: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            output: default_output(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("risk_table.parquet")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}
