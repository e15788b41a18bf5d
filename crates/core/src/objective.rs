/// A scalar objective function of one real variable.
///
/// Searches only ever call [`Objective::value`], so an objective must be pure:
/// calling it twice with the same `x` must return the same value. It only needs
/// to be defined on the interval being searched.
///
/// Any `Fn(f64) -> f64` is an objective, which lets callers pass closures that
/// capture their own coefficients:
///
/// ```rust
/// use unimin_core::Objective;
///
/// let (shift, floor) = (3.0, 2.0);
/// let f = move |x: f64| (x - shift).powi(2) + floor;
///
/// assert_eq!(f.value(3.0), 2.0);
/// ```
pub trait Objective {
    /// Evaluates the objective at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
