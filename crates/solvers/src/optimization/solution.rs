/// Indicates how a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Met the configured tolerance, or completed every planned step.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    ///
    /// The reported `x` is a best-effort estimate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the minimizer location.
    pub x: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Creates a solution and records how the search finished.
    pub(super) fn finish(method: &'static str, status: Status, x: f64, iters: usize) -> Self {
        match status {
            Status::MaxIters => {
                tracing::warn!(method, iters, x, "iteration limit reached before convergence");
            }
            Status::Converged | Status::StoppedByObserver => {
                tracing::debug!(method, iters, x, ?status, "search finished");
            }
        }
        Self { status, x, iters }
    }

    /// Returns true if the search met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
