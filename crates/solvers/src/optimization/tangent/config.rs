use crate::optimization::{ConfigError, DEFAULT_EPSILON, DEFAULT_MAX_ITERS, error::check_tolerance};

/// Configuration for the tangent solver.
///
/// `epsilon` is both the derivative magnitude that counts as converged and
/// the offset used when pulling `x` back inside the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    step: f64,
    diff_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            epsilon: DEFAULT_EPSILON,
            step: Self::DEFAULT_STEP,
            diff_step: Self::DEFAULT_DIFF_STEP,
        }
    }
}

impl Config {
    /// Descent step multiplier applied to the derivative.
    pub const DEFAULT_STEP: f64 = 0.1;

    /// Offset `h` used by the central difference.
    pub const DEFAULT_DIFF_STEP: f64 = 1e-5;

    /// Creates a config with the default step sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not positive and finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        Self::with_steps(
            max_iters,
            epsilon,
            Self::DEFAULT_STEP,
            Self::DEFAULT_DIFF_STEP,
        )
    }

    /// Creates a config with explicit descent and difference step sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon`, `step`, or `diff_step` is not positive
    /// and finite.
    pub fn with_steps(
        max_iters: usize,
        epsilon: f64,
        step: f64,
        diff_step: f64,
    ) -> Result<Self, ConfigError> {
        check_tolerance(epsilon)?;
        check_step("step", step)?;
        check_step("diff_step", diff_step)?;

        Ok(Self {
            max_iters,
            epsilon,
            step,
            diff_step,
        })
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the derivative tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the descent step multiplier.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the central difference offset.
    #[must_use]
    pub fn diff_step(&self) -> f64 {
        self.diff_step
    }
}

fn check_step(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveStep { name, value })
    }
}
