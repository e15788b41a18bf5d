use unimin_core::Objective;

/// Central finite-difference estimate of the derivative at `x`.
///
/// `(f(x + h) - f(x - h)) / 2h`
pub(super) fn central_difference<F: Objective>(objective: &F, x: f64, h: f64) -> f64 {
    (objective.value(x + h) - objective.value(x - h)) / (2.0 * h)
}
