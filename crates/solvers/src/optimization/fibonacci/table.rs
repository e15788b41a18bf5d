use crate::optimization::Error;

/// Length of the longest table whose entries all fit in a `u64`.
const MAX_LEN: usize = 93;

/// Fibonacci numbers `F[0..=n+1]` with `F[0] = F[1] = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FibonacciTable(Vec<u64>);

impl FibonacciTable {
    /// Builds the table for a search of order `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericOverflow`] at the first index whose value does
    /// not fit in a `u64`.
    pub(super) fn new(n: usize) -> Result<Self, Error> {
        let len = n.saturating_add(2);
        let mut numbers = Vec::with_capacity(len.min(MAX_LEN));
        numbers.extend([1_u64, 1]);
        for index in 2..len {
            let next = numbers[index - 1]
                .checked_add(numbers[index - 2])
                .ok_or(Error::NumericOverflow { index })?;
            numbers.push(next);
        }
        Ok(Self(numbers))
    }

    /// Returns `F[num] / F[den]`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn ratio(&self, num: usize, den: usize) -> f64 {
        self.0[num] as f64 / self.0[den] as f64
    }
}
