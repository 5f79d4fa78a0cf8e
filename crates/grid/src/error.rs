//! Error types for boreas-grid.

use std::path::PathBuf;

/// Error type for all fallible operations in the boreas-grid crate.
///
/// Load-time variants (everything except [`GridError::YearNotFound`]) are
/// fatal to the dataset being loaded but must never affect sibling datasets;
/// `YearNotFound` is a per-query condition.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when the declared hazard variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when none of the aliases for a coordinate axis match.
    #[error("axis '{name}' not found in {}", path.display())]
    MissingAxis {
        /// First alias tried for the axis.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a dimension has an unexpected size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a coordinate axis contains NaN or infinity.
    #[error("axis '{axis}' contains non-finite coordinates")]
    AxisNotFinite {
        /// Name of the offending axis.
        axis: String,
    },

    /// Returned when a coordinate axis is neither ascending nor descending.
    #[error("axis '{axis}' is not monotonic")]
    AxisNotSorted {
        /// Name of the offending axis.
        axis: String,
    },

    /// Returned when a coordinate axis has no entries.
    #[error("axis '{axis}' is empty")]
    EmptyAxis {
        /// Name of the offending axis.
        axis: String,
    },

    /// Returned when a time value cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Returned when two timesteps resolve to the same calendar year.
    #[error("duplicate year {year} in time axis")]
    DuplicateYear {
        /// The year that appeared more than once.
        year: i32,
    },

    /// Returned when a requested year is absent from the dataset.
    #[error("year {year} not found in dataset '{variable}'")]
    YearNotFound {
        /// The requested year.
        year: i32,
        /// Hazard variable of the dataset that was queried.
        variable: String,
    },
}

impl From<netcdf::Error> for GridError {
    fn from(e: netcdf::Error) -> Self {
        GridError::Netcdf {
            reason: e.to_string(),
        }
    }
}
