/// Iteration event emitted by the tangent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Position after the step and any clamping.
    pub x: f64,

    /// Derivative estimate that drove this step.
    pub derivative: f64,

    /// True if the step left the bracket and `x` was pulled back inside.
    pub clamped: bool,
}
