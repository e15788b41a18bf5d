//! Tangent (gradient descent) method for single-variable minimization.
//!
//! # Algorithm
//!
//! Starting at the bracket midpoint, the solver estimates the derivative with
//! a central finite difference and takes a fixed-size step against it. It
//! stops as soon as the derivative magnitude drops below `epsilon`.
//!
//! After each step, an `x` that left `[a, b]` is pulled back to `a + epsilon`
//! or `b - epsilon`. The projection is not followed by a fresh derivative check;
//! convergence is only tested at the top of the next iteration. The derivative
//! at the final position is still checked when the iteration cap is reached,
//! so a last step that lands on the minimum reports convergence.
//!
//! # Limitations
//!
//! - **Fixed step**: No line search. Steep objectives overshoot and may
//!   oscillate until the iteration cap.
//! - **Local only**: Converges to whatever stationary point the descent reaches.
//! - **Two evaluations per iteration**: One on each side of `x`.
//!
//! The solver is the only one whose iteration cap is expected to be hit in
//! normal use. A result with [`Status::MaxIters`] is a best-effort estimate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per descent step, after clamping.
//! Observers can return [`Action::StopEarly`] to halt immediately.
//!
//! [`Status::MaxIters`]: crate::optimization::Status::MaxIters

mod config;
mod derivative;
mod event;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use event::Event;

use unimin_core::{Objective, Observer};

use super::{Action, Error, Interval, Solution, Status};

use derivative::central_difference;

/// Descends toward a minimum of the objective using numeric derivatives.
///
/// The observer receives an [`Event`] after every step.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bracket is not a finite interval
/// with `a < b`.
pub fn minimize<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    let (a, b) = (interval.a(), interval.b());
    let epsilon = config.epsilon();

    let mut x = interval.midpoint();
    let mut iters = 0;
    let status = loop {
        let derivative = central_difference(objective, x, config.diff_step());
        if derivative.abs() < epsilon {
            break Status::Converged;
        }
        if iters == config.max_iters() {
            break Status::MaxIters;
        }
        iters += 1;

        x -= config.step() * derivative;
        let clamped = x < a || x > b;
        if x < a {
            x = a + epsilon;
        }
        if x > b {
            x = b - epsilon;
        }
        tracing::trace!(iter = iters, x, derivative, clamped, "tangent step");

        let event = Event {
            iter: iters,
            x,
            derivative,
            clamped,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    Ok(Solution::finish("tangent", status, x, iters))
}

/// Descends toward a minimum of the objective without observer support.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bracket is not a finite interval
/// with `a < b`.
pub fn minimize_unobserved<F: Objective>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}
