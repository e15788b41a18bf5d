//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a bounded
//! interval. It maintains two interior points placed at `resphi = 2 - φ` from
//! each end, compares their objectives, and shrinks the bracket toward the
//! better point. The surviving interior point lands exactly where the next
//! iteration needs a probe, so every iteration costs one new evaluation.
//!
//! # When to Use
//!
//! Golden section search is appropriate when:
//! - The objective function is unimodal (single minimum) on the bracket
//! - Derivative information is unavailable or expensive
//! - You want the fewest evaluations for a given tolerance without derivatives
//!
//! # Observer Events
//!
//! The solver evaluates both interior points up front without emitting an
//! event, then emits one [`Event`] per iteration carrying the new evaluation,
//! the retained interior point (`other`), and the shrunk bracket.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod bracket;
mod config;
mod event;
mod search;


pub use config::Config;
pub use event::Event;

use unimin_core::{Objective, Observer};

use super::{Action, Error, Interval, Solution};

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first two.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bracket is not a finite interval
/// with `a < b`.
pub fn minimize<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    Ok(search::search(objective, interval, config, observer))
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
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
