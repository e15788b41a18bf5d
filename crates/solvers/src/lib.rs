//! Bracketed one-dimensional minimization.
//!
//! The [`Minimizer`] facade wraps a single [`Objective`] and offers four
//! independent searches over an interval `[a, b]`. Each search is also
//! available on its own under [`optimization`], where it accepts an explicit
//! config and an [`Observer`] for per-iteration events.
//!
//! ```rust
//! use unimin_solvers::{DEFAULT_EPSILON, Minimizer};
//!
//! let minimizer = Minimizer::new(|x: f64| (x - 3.0).powi(2) + 2.0);
//! let solution = minimizer.golden_section(0.0, 10.0, DEFAULT_EPSILON)?;
//!
//! assert!((solution.x - 3.0).abs() < 1e-3);
//! # Ok::<(), unimin_solvers::optimization::Error>(())
//! ```
//!
//! [`Objective`]: unimin_core::Objective
//! [`Observer`]: unimin_core::Observer

mod minimizer;

pub mod optimization;

pub use minimizer::Minimizer;
pub use optimization::{DEFAULT_EPSILON, DEFAULT_FIBONACCI_ORDER, DEFAULT_MAX_ITERS};
