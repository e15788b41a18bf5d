use unimin_core::Objective;

use crate::optimization::{
    DEFAULT_MAX_ITERS, Error, Solution, bisection, fibonacci, golden_section, tangent,
};

/// Width ratio between consecutive golden section brackets, `φ - 1`.
const INV_PHI: f64 = 0.618_033_988_749_895;

/// A scalar objective paired with four interchangeable minimization methods.
///
/// Every method searches `[a, b]` (which must satisfy `a < b`) and reports the
/// estimated minimizer in [`Solution::x`]. The objective is only borrowed
/// during a search, so one `Minimizer` can run any number of searches.
///
/// Each method builds the matching solver config from its arguments; use the
/// functions in [`crate::optimization`] directly for iteration caps, custom
/// step sizes, or observers.
#[derive(Debug, Clone)]
pub struct Minimizer<F> {
    objective: F,
}

impl<F: Objective> Minimizer<F> {
    /// Wraps an objective.
    pub fn new(objective: F) -> Self {
        Self { objective }
    }

    /// Returns the wrapped objective.
    pub fn objective(&self) -> &F {
        &self.objective
    }

    /// Runs the bisection-style (quartering) search.
    ///
    /// The iteration cap is [`DEFAULT_MAX_ITERS`], raised for intervals wide
    /// enough that halving down to `epsilon` needs more iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid or `epsilon` is not
    /// positive and finite.
    pub fn bisection(&self, a: f64, b: f64, epsilon: f64) -> Result<Solution, Error> {
        let max_iters = iteration_cap(a, b, epsilon, 0.5);
        let config = bisection::Config::new(max_iters, epsilon)?;
        bisection::minimize_unobserved(&self.objective, [a, b], &config)
    }

    /// Runs golden section search.
    ///
    /// The iteration cap is [`DEFAULT_MAX_ITERS`], raised for intervals wide
    /// enough that shrinking down to `epsilon` needs more iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid or `epsilon` is not
    /// positive and finite.
    pub fn golden_section(&self, a: f64, b: f64, epsilon: f64) -> Result<Solution, Error> {
        let max_iters = iteration_cap(a, b, epsilon, INV_PHI);
        let config = golden_section::Config::new(max_iters, epsilon)?;
        golden_section::minimize_unobserved(&self.objective, [a, b], &config)
    }

    /// Runs the tangent (gradient descent) method.
    ///
    /// Check [`Solution::status`] to tell convergence apart from a result
    /// taken at the iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid or `epsilon` is not
    /// positive and finite.
    pub fn tangents(
        &self,
        a: f64,
        b: f64,
        epsilon: f64,
        max_iters: usize,
    ) -> Result<Solution, Error> {
        let config = tangent::Config::new(max_iters, epsilon)?;
        tangent::minimize_unobserved(&self.objective, [a, b], &config)
    }

    /// Runs Fibonacci search of order `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is invalid, `n` is below
    /// [`fibonacci::Config::MIN_ORDER`], or the Fibonacci numbers for `n`
    /// overflow a `u64`.
    pub fn fibonacci(&self, a: f64, b: f64, n: usize) -> Result<Solution, Error> {
        let config = fibonacci::Config::new(n)?;
        fibonacci::minimize_unobserved(&self.objective, [a, b], &config)
    }
}

/// Returns the iteration cap for a bracket search whose width shrinks by
/// `ratio` per iteration.
///
/// The cap is twice the iterations needed to shrink `b - a` below `epsilon`,
/// and never less than [`DEFAULT_MAX_ITERS`]. Invalid or overflowing widths
/// fall back to the default and are reported by the search itself.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn iteration_cap(a: f64, b: f64, epsilon: f64, ratio: f64) -> usize {
    let needed = ((b - a) / epsilon).ln() / ratio.recip().ln();
    if !needed.is_finite() || needed <= 0.0 {
        return DEFAULT_MAX_ITERS;
    }
    DEFAULT_MAX_ITERS.max(2 * needed.ceil() as usize)
}
