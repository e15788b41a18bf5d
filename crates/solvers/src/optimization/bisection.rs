//! Bisection-style search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each iteration probes the objective at one quarter and three quarters of
//! the bracket. If the left probe is lower, the right half of the bracket is
//! discarded; otherwise the left half is. The search stops once the bracket is
//! no wider than `epsilon` and returns its midpoint.
//!
//! # Limitations
//!
//! - **Halving, not quartering**: Only half the bracket is discarded per
//!   iteration even though the probes would justify dropping a quarter on the
//!   other side too.
//! - **Half-bracket update**: The kept half is bounded by the midpoint, not by
//!   the losing probe. For asymmetric or flat objectives the minimum can fall
//!   in the discarded half.
//! - **No reuse**: Both probes are fresh evaluations every iteration.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration after the bracket update.
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod config;
mod event;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use event::Event;

use unimin_core::{Objective, Observer, Point};

use super::{Action, Error, Interval, Solution, Status};

/// Finds a minimum of the objective with the quartering bracket rule.
///
/// The observer receives an [`Event`] after every bracket update.
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
    let (mut a, mut b) = (interval.a(), interval.b());

    let mut iters = 0;
    let status = loop {
        if b - a <= config.epsilon() {
            break Status::Converged;
        }
        if iters == config.max_iters() {
            break Status::MaxIters;
        }
        iters += 1;

        let mid = (a + b) / 2.0;
        let x1 = a + (b - a) / 4.0;
        let x2 = b - (b - a) / 4.0;
        let left = Point::new(x1, objective.value(x1));
        let right = Point::new(x2, objective.value(x2));

        if left.objective < right.objective {
            b = mid;
        } else {
            a = mid;
        }
        tracing::trace!(iter = iters, width = b - a, "bisection step");

        let event = Event {
            iter: iters,
            bracket: [a, b],
            probes: [left, right],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    let x = (a + b) / 2.0;
    debug_assert!(interval.contains(x), "midpoint {x} left the initial bracket");

    Ok(Solution::finish("bisection", status, x, iters))
}

/// Finds a minimum of the objective without observer support.
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
