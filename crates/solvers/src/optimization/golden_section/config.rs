use crate::optimization::{ConfigError, DEFAULT_EPSILON, DEFAULT_MAX_ITERS, error::check_tolerance};

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not positive and finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        check_tolerance(epsilon)?;
        Ok(Self { max_iters, epsilon })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
