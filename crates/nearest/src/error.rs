//! Error types for the boreas-nearest crate.

/// Error type for all fallible operations in the boreas-nearest crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NearestError {
    /// Returned when the point slice is empty.
    ///
    /// An empty year slice reaching the resolver is a programmer or data
    /// error; it is surfaced, never swallowed.
    #[error("no grid points to search")]
    EmptyDataset,

    /// Returned when a query coordinate is NaN or infinite.
    #[error("non-finite query {coord}")]
    NonFiniteQuery {
        /// Which coordinate was non-finite, `"lat"` or `"lon"`.
        coord: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_dataset() {
        let e = NearestError::EmptyDataset;
        assert_eq!(e.to_string(), "no grid points to search");
    }

    #[test]
    fn display_non_finite_query() {
        let e = NearestError::NonFiniteQuery { coord: "lat" };
        assert_eq!(e.to_string(), "non-finite query lat");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<NearestError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<NearestError>();
    }
}
