//! Configuration for a classification run.

use crate::error::KnnError;

/// Configuration for classifying a batch of queries.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kvote_knn::KnnConfig;
///
/// let config = KnnConfig::new(5).with_parallel(true);
///
/// assert!(config.validate_against(10).is_ok());
/// assert!(config.validate_against(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Run the per-query loop on the rayon pool.
    parallel: bool,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: sequential evaluation.
    pub fn new(k: usize) -> Self {
        Self { k, parallel: false }
    }

    /// Enables or disables parallel evaluation across queries.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether queries are evaluated in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration against a reference set of `n_reference` points.
    ///
    /// An empty reference set is reported before k is looked at.
    pub fn validate_against(&self, n_reference: usize) -> Result<(), KnnError> {
        check_k(self.k, n_reference)
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Checks `1 <= k <= n_reference`, reporting an empty reference set first.
pub(crate) fn check_k(k: usize, n_reference: usize) -> Result<(), KnnError> {
    if n_reference == 0 {
        return Err(KnnError::EmptyReferenceSet);
    }
    if k < 1 || k > n_reference {
        return Err(KnnError::InvalidK { k, n_reference });
    }
    Ok(())
}
