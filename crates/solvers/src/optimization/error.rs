use thiserror::Error;

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The tolerance is zero, negative, or non-finite.
    #[error("epsilon must be positive and finite, got {epsilon}")]
    NonPositiveTolerance { epsilon: f64 },

    /// The Fibonacci order is too small for the ratio indices to exist.
    #[error("Fibonacci order must be at least {min}, got {n}")]
    InvalidFibonacciOrder { n: usize, min: usize },

    /// A step size is zero, negative, or non-finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveStep { name: &'static str, value: f64 },
}

/// Errors that can occur during a search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid interval [{a}, {b}]: endpoints must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Fibonacci number at index {index} does not fit in a u64")]
    NumericOverflow { index: usize },
}

/// Checks that a tolerance is positive and finite.
pub(super) fn check_tolerance(epsilon: f64) -> Result<(), ConfigError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveTolerance { epsilon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_must_be_positive() {
        assert!(check_tolerance(1e-5).is_ok());
        assert!(matches!(
            check_tolerance(0.0),
            Err(ConfigError::NonPositiveTolerance { .. })
        ));
        assert!(matches!(
            check_tolerance(-1e-5),
            Err(ConfigError::NonPositiveTolerance { .. })
        ));
    }

    #[test]
    fn tolerance_must_be_finite() {
        assert!(check_tolerance(f64::NAN).is_err());
        assert!(check_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn config_errors_convert_into_search_errors() {
        let err: Error = ConfigError::InvalidFibonacciOrder { n: 2, min: 3 }.into();
        assert_eq!(
            err,
            Error::InvalidConfig(ConfigError::InvalidFibonacciOrder { n: 2, min: 3 })
        );
        assert_eq!(
            err.to_string(),
            "invalid config: Fibonacci order must be at least 3, got 2"
        );
    }
}
