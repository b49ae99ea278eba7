use thiserror::Error;

/// Tuning for the bracketing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    quality_threshold: Option<f64>,
    max_extensions: usize,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("quality threshold must not be NaN")]
    QualityNan,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(None, 64).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `quality_threshold` is a criterion value at or below which the grid
    /// scan may stop early, as soon as the bracket is closed; `None`
    /// disables the early exit. `max_extensions` caps the number of
    /// evaluations each endpoint-extension walk may spend before giving up
    /// with [`Status::ExtensionLimit`](super::Status::ExtensionLimit).
    ///
    /// # Errors
    ///
    /// Returns an error if the quality threshold is NaN.
    pub fn new(quality_threshold: Option<f64>, max_extensions: usize) -> Result<Self, ConfigError> {
        if quality_threshold.is_some_and(f64::is_nan) {
            return Err(ConfigError::QualityNan);
        }

        Ok(Self {
            quality_threshold,
            max_extensions,
        })
    }

    /// Returns the early-exit quality threshold, if any.
    #[must_use]
    pub fn quality_threshold(&self) -> Option<f64> {
        self.quality_threshold
    }

    /// Returns the per-walk extension evaluation limit.
    #[must_use]
    pub fn max_extensions(&self) -> usize {
        self.max_extensions
    }
}
