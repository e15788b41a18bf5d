//! Core traits and types for one-dimensional minimization.
//!
//! This crate defines the shared abstractions that the searches in
//! `unimin-solvers` build on:
//!
//! - [`Objective`]: a real-valued function of one real variable
//! - [`Point`]: an `x` paired with its objective value
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;
mod point;

pub use objective::Objective;
pub use observer::Observer;
pub use point::Point;
