use super::Error;

/// A validated search interval `[a, b]` with finite `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    ///
    /// Reversed endpoints are rejected rather than swapped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if either endpoint is non-finite or
    /// if `a >= b`.
    pub fn new(a: f64, b: f64) -> Result<Self, Error> {
        if a.is_finite() && b.is_finite() && a < b {
            Ok(Self { a, b })
        } else {
            Err(Error::InvalidInterval { a, b })
        }
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the interval width `b - a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = Error;

    fn try_from(bracket: [f64; 2]) -> Result<Self, Self::Error> {
        let [a, b] = bracket;
        Self::new(a, b)
    }
}
