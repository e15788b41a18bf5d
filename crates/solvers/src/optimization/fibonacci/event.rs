use unimin_core::Point;

/// Step event emitted by the Fibonacci solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Step counter (1-based, at most `n - 2`).
    pub step: usize,

    /// Bracket after this step's shrink.
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
