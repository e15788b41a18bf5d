use unimin_core::Point;

/// Iteration event emitted by the golden section solver.
///
/// `point` is the single new evaluation made this iteration. `other` is the
/// interior point carried over from the previous iteration, which was the
/// better of the two before the shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket after this iteration's shrink.
    pub bracket: [f64; 2],

    /// The newly evaluated interior point.
    pub point: Point,

    /// The retained interior point.
    pub other: Point,
}

impl Event {
    /// Returns the width of the shrunk bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
