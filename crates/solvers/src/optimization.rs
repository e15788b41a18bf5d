//! Solvers for minimizing a scalar objective over a bounded interval.
//!
//! Every solver takes an [`Objective`], a bracket `[a, b]` with `a < b`, a
//! solver-specific `Config`, and an [`Observer`]. None of them check that the
//! objective is unimodal on the bracket; the result is only meaningful when it
//! is.
//!
//! # Solvers
//!
//! - [`bisection`] : quartering bracket shrink, two fresh evaluations per step
//! - [`golden_section`] : golden ratio probes, one reused evaluation per step
//! - [`tangent`] : gradient descent on a central finite-difference derivative
//! - [`fibonacci`] : fixed number of steps placed by Fibonacci ratios
//!
//! [`Objective`]: unimin_core::Objective
//! [`Observer`]: unimin_core::Observer

mod action;
mod error;
mod interval;
mod solution;

pub use action::Action;
pub use error::{ConfigError, Error};
pub use interval::Interval;
pub use solution::{Solution, Status};

pub mod bisection;
pub mod fibonacci;
pub mod golden_section;
pub mod tangent;

/// Default tolerance for every search.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Default number of Fibonacci search steps plus two.
pub const DEFAULT_FIBONACCI_ORDER: usize = 30;
