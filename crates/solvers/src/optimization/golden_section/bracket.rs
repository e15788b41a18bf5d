use crate::optimization::Interval;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The golden ratio complement: 2 - φ ≈ 0.382
///
/// Interior points sit this fraction of the width in from each end.
const RESPHI: f64 = 2.0 - PHI;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + resphi * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `right - resphi * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from an interval with interior points positioned by
    /// the golden ratio.
    pub(super) fn new(interval: Interval) -> Self {
        let (left, right) = (interval.a(), interval.b());
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + RESPHI * width,
            inner_right: right - RESPHI * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns the current bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks the bounds to `[left, inner_right]` and computes a new `inner_left`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + RESPHI * self.width();
    }

    /// Shrinks the bounds to `[inner_left, right]` and computes a new `inner_right`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.right - RESPHI * self.width();
    }
}
