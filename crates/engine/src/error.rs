//! Error types for the boreas-engine crate.

use boreas_grid::GridError;
use boreas_nearest::NearestError;

/// Error type for all fallible operations in the boreas-engine crate.
///
/// Errors are always local to one dataset's lookup: a multi-dataset query
/// reports them per key and never aborts the sibling datasets.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Returned when no dataset is registered under the requested name.
    #[error("unknown dataset '{name}'")]
    UnknownDataset {
        /// The name that failed to resolve.
        name: String,
    },

    /// A failure from the grid layer (load problems, missing years).
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A failure from the nearest-sample resolver.
    #[error(transparent)]
    Nearest(#[from] NearestError),

    /// Returned when the geocoding collaborator cannot resolve a place.
    ///
    /// Terminal input-validation failure: typically a genuine "no such
    /// place", so callers surface it instead of retrying.
    #[error("no coordinates found for '{place}'")]
    CoordinateNotFound {
        /// The free-text place that failed to resolve.
        place: String,
    },
}
