use unimin_core::Point;

/// Iteration event emitted by the bisection-style solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket after this iteration's update.
    pub bracket: [f64; 2],

    /// The quarter and three-quarter probes, left to right.
    pub probes: [Point; 2],
}

impl Event {
    /// Returns the width of the updated bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
