//! Fibonacci search for single-variable minimization.
//!
//! # Algorithm
//!
//! Fibonacci search shrinks the bracket like golden section search but places
//! its interior points with ratios of Fibonacci numbers instead of a fixed
//! ratio. The number of steps is fixed in advance by the order `n`: the solver
//! always performs `n - 2` shrink steps and returns the midpoint of the final
//! pair of interior points. There is no tolerance check.
//!
//! The Fibonacci numbers are computed as `u64`. Orders of 92 and above need
//! numbers past `u64::MAX`, which is reported as [`Error::NumericOverflow`]
//! rather than producing wrapped ratios.
//!
//! # Observer Events
//!
//! The solver evaluates both initial interior points without emitting an
//! event, then emits one [`Event`] per step. Observers can return
//! [`Action::StopEarly`] to halt immediately.

mod config;
mod event;
mod table;


pub use config::Config;
pub use event::Event;

use unimin_core::{Objective, Observer, Point};

use super::{Action, Error, Interval, Solution, Status};

use table::FibonacciTable;

/// Finds the minimum of the objective using Fibonacci search.
///
/// The observer receives an [`Event`] after every shrink step.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bracket is not a finite interval
/// with `a < b`, or [`Error::NumericOverflow`] if the Fibonacci numbers for
/// the configured order do not fit in a `u64`.
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
    let n = config.n();
    let fib = FibonacciTable::new(n)?;

    let (mut a, mut b) = (interval.a(), interval.b());
    let mut left = evaluate(objective, a + fib.ratio(n - 2, n) * (b - a));
    let mut right = evaluate(objective, a + fib.ratio(n - 1, n) * (b - a));

    let mut steps = 0;
    let mut status = Status::Converged;
    for k in 1..n - 1 {
        let (point, other) = if left.objective > right.objective {
            a = left.x;
            left = right;
            right = evaluate(objective, a + fib.ratio(n - k - 1, n - k) * (b - a));
            (right, left)
        } else {
            b = right.x;
            right = left;
            left = evaluate(objective, a + fib.ratio(n - k - 2, n - k) * (b - a));
            (left, right)
        };
        steps = k;
        tracing::trace!(step = k, width = b - a, "fibonacci step");

        let event = Event {
            step: k,
            bracket: [a, b],
            point,
            other,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let x = (left.x + right.x) / 2.0;
    Ok(Solution::finish("fibonacci", status, x, steps))
}

/// Finds the minimum of the objective without observer support.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bracket is not a finite interval
/// with `a < b`, or [`Error::NumericOverflow`] if the Fibonacci numbers for
/// the configured order do not fit in a `u64`.
pub fn minimize_unobserved<F: Objective>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}

fn evaluate<F: Objective>(objective: &F, x: f64) -> Point {
    Point::new(x, objective.value(x))
}
