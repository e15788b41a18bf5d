use crate::optimization::{ConfigError, DEFAULT_FIBONACCI_ORDER};

/// Configuration for the Fibonacci solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: DEFAULT_FIBONACCI_ORDER,
        }
    }
}

impl Config {
    /// Smallest order for which every ratio index `n - k - 2` exists.
    pub const MIN_ORDER: usize = 3;

    /// Creates a new config for a search of order `n` (`n - 2` steps).
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is less than [`Config::MIN_ORDER`].
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n < Self::MIN_ORDER {
            return Err(ConfigError::InvalidFibonacciOrder {
                n,
                min: Self::MIN_ORDER,
            });
        }
        Ok(Self { n })
    }

    /// Returns the search order.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of shrink steps the search performs.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.n - 2
    }
}
