//! Error types for the boreas-classify crate.

/// Error type for all fallible operations in the boreas-classify crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifyError {
    /// Returned when no finite values remain after filtering a slice.
    ///
    /// Callers must treat this as "thresholds unavailable for this year"
    /// and classify everything as missing, never default to a class.
    #[error("no finite values to compute thresholds from")]
    InsufficientData,
}
