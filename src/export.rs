//! The `export` subcommand: classify every cell of every year and write the
//! derived risk table to Parquet.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, Float64Array, Int32Array, RecordBatch, StringArray, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use tracing::{debug, info, warn};

use boreas_classify::{RiskClass, Scheme, catalog_entry, classify};
use boreas_engine::QueryEngine;
use boreas_grid::{GridDataset, GridPoint};

use crate::cli::ExportArgs;
use crate::config;
use crate::convert;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)
                    .context("invalid zstd level")?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Run the export pipeline.
pub fn run(args: &ExportArgs) -> Result<()> {
    let config = config::load_config(&args.config)?;
    if config.datasets.is_empty() {
        bail!("no [[dataset]] entries in {}", args.config.display());
    }

    let scheme = convert::build_scheme(&config.scheme)?;
    let compression = convert::build_compression(&config.export.compression)?;
    let output = args.output.as_ref().unwrap_or(&config.export.output);

    // A dataset that fails to load is dropped with a warning; the others
    // still export.
    let mut engine = QueryEngine::new(scheme);
    for dataset in &config.datasets {
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
        bail!("no datasets could be loaded");
    }

    let mut rows = RiskRows::default();
    for name in engine.dataset_names() {
        let Some(dataset) = engine.dataset(name) else {
            continue;
        };
        for &year in dataset.years() {
            let points = dataset
                .slice(year)
                .with_context(|| format!("failed to slice {name} for {year}"))?;
            let thresholds = engine
                .thresholds_for(name, year)
                .with_context(|| format!("failed to compute thresholds for {name}/{year}"))?;

            let finite = boreas_stats::filter_finite(
                &points.iter().map(|p| p.value).collect::<Vec<f64>>(),
            );
            debug!(
                dataset = name,
                year,
                n_valid = finite.len(),
                mean_value = boreas_stats::mean(&finite),
                "classified year slice"
            );

            for point in &points {
                let risk = match &thresholds {
                    Some(t) => classify(point.value, t),
                    None => RiskClass::Missing,
                };
                rows.push(name, year, point, risk, scheme);
            }
        }
    }

    write_table(output, &rows, compression, config.export.row_group_size)?;
    info!(rows = rows.len(), path = %output.display(), "wrote risk table");
    Ok(())
}

/// Column-oriented accumulator for the risk table.
#[derive(Debug, Default)]
struct RiskRows {
    datasets: Vec<String>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    years: Vec<i32>,
    /// `None` rows are missing cells; consumers must exclude them from
    /// numeric aggregation rather than read them as zero.
    raw_values: Vec<Option<f64>>,
    risk_ranks: Vec<u8>,
    risk_labels: Vec<&'static str>,
}

impl RiskRows {
    fn push(&mut self, dataset: &str, year: i32, point: &GridPoint, risk: RiskClass, scheme: Scheme) {
        self.datasets.push(dataset.to_string());
        self.lats.push(point.lat);
        self.lons.push(point.lon);
        self.years.push(year);
        self.raw_values.push(if point.value.is_nan() {
            None
        } else {
            Some(point.value)
        });
        self.risk_ranks.push(risk.rank());
        self.risk_labels.push(catalog_entry(scheme, risk).label);
    }

    fn len(&self) -> usize {
        self.datasets.len()
    }
}

/// Builds the Arrow schema for the risk table.
fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new("dataset", DataType::Utf8, false),
        Field::new("lat", DataType::Float64, false),
        Field::new("lon", DataType::Float64, false),
        Field::new("year", DataType::Int32, false),
        Field::new("raw_value", DataType::Float64, true),
        Field::new("risk_rank", DataType::UInt8, false),
        Field::new("risk_label", DataType::Utf8, false),
    ])
}

/// Converts accumulated rows into an Arrow [`RecordBatch`].
fn rows_to_record_batch(rows: &RiskRows, schema: &Schema) -> Result<RecordBatch> {
    let dataset_col: ArrayRef = Arc::new(StringArray::from(rows.datasets.clone()));
    let lat_col: ArrayRef = Arc::new(Float64Array::from(rows.lats.clone()));
    let lon_col: ArrayRef = Arc::new(Float64Array::from(rows.lons.clone()));
    let year_col: ArrayRef = Arc::new(Int32Array::from(rows.years.clone()));
    let raw_col: ArrayRef = Arc::new(Float64Array::from(rows.raw_values.clone()));
    let rank_col: ArrayRef = Arc::new(UInt8Array::from(rows.risk_ranks.clone()));
    let label_col: ArrayRef = Arc::new(StringArray::from(rows.risk_labels.clone()));

    RecordBatch::try_new(
        Arc::new(schema.clone()),
        vec![
            dataset_col,
            lat_col,
            lon_col,
            year_col,
            raw_col,
            rank_col,
            label_col,
        ],
    )
    .context("failed to assemble record batch")
}

/// Writes the risk table to a Parquet file at `path`.
fn write_table(
    path: &Path,
    rows: &RiskRows,
    compression: Compression,
    row_group_size: usize,
) -> Result<()> {
    let schema = build_schema();
    let batch = rows_to_record_batch(rows, &schema)?;

    let props = WriterProperties::builder()
        .set_compression(compression.to_parquet()?)
        .set_max_row_group_size(row_group_size)
        .build();

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema), Some(props))
        .context("failed to open parquet writer")?;
    writer.write(&batch).context("failed to write record batch")?;
    writer.close().context("failed to finalise parquet file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> RiskRows {
        let mut rows = RiskRows::default();
        rows.push(
            "wind",
            2025,
            &GridPoint::new(48.0, 2.0, 3.0),
            RiskClass::Level(1),
            Scheme::ThreeLevel,
        );
        rows.push(
            "wind",
            2025,
            &GridPoint::new(48.0, 2.5, f64::NAN),
            RiskClass::Missing,
            Scheme::ThreeLevel,
        );
        rows
    }

    #[test]
    fn schema_columns() {
        let schema = build_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(
            names,
            vec!["dataset", "lat", "lon", "year", "raw_value", "risk_rank", "risk_label"]
        );
        assert!(schema.field(4).is_nullable());
        assert!(!schema.field(5).is_nullable());
    }

    #[test]
    fn record_batch_carries_nulls_for_missing() {
        let rows = sample_rows();
        let schema = build_schema();
        let batch = rows_to_record_batch(&rows, &schema).expect("batch builds");

        assert_eq!(batch.num_rows(), 2);
        let raw = batch
            .column(4)
            .as_any()
            .downcast_ref::<Float64Array>()
            .expect("float column");
        assert!(!raw.is_null(0));
        assert_eq!(raw.value(0), 3.0);
        assert!(raw.is_null(1));
    }

    #[test]
    fn rows_track_catalog_labels() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.risk_labels, vec!["Low", "Missing Data"]);
        assert_eq!(rows.risk_ranks, vec![1, 0]);
    }

    #[test]
    fn compression_mapping() {
        assert_eq!(
            Compression::None.to_parquet().expect("maps"),
            parquet::basic::Compression::UNCOMPRESSED
        );
        assert_eq!(
            Compression::Snappy.to_parquet().expect("maps"),
            parquet::basic::Compression::SNAPPY
        );
        assert!(matches!(
            Compression::Zstd.to_parquet().expect("maps"),
            parquet::basic::Compression::ZSTD(_)
        ));
    }
}
