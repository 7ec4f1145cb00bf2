//! Error types for the kvote-knn crate.

/// Error type for all fallible operations in the kvote-knn crate.
///
/// Every variant is fatal for a batch: the evaluator never skips a query or
/// substitutes a default prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when the reference set is empty.
    #[error("reference set is empty")]
    EmptyReferenceSet,

    /// Returned when the query set handed to the evaluator is empty.
    #[error("query set is empty")]
    EmptyQuerySet,

    /// Returned when k is outside `[1, n_reference]`.
    #[error("k must be in [1, {n_reference}], got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Size of the reference set k was checked against.
        n_reference: usize,
    },

    /// Returned when two feature vectors have different lengths.
    #[error("attribute length mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Attribute count of the reference set.
        expected: usize,
        /// Attribute count of the offending point.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_reference_set() {
        let e = KnnError::EmptyReferenceSet;
        assert_eq!(e.to_string(), "reference set is empty");
    }

    #[test]
    fn error_empty_query_set() {
        let e = KnnError::EmptyQuerySet;
        assert_eq!(e.to_string(), "query set is empty");
    }

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK {
            k: 0,
            n_reference: 12,
        };
        assert_eq!(e.to_string(), "k must be in [1, 12], got 0");
    }

    #[test]
    fn error_dimension_mismatch() {
        let e = KnnError::DimensionMismatch {
            expected: 4,
            got: 3,
        };
        assert_eq!(
            e.to_string(),
            "attribute length mismatch: expected 4, got 3"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
