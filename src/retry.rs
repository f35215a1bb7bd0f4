//! Attempt budget for the interactive prompt loops

/// Counts attempts against an optional upper bound
///
/// A `max` of zero means the loop may run forever.
#[derive(Debug, Clone, Copy)]
pub struct Attempts {
    max: usize,
    used: usize,
}

impl Attempts {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max, used: 0 }
    }

    /// Consume one attempt. Returns `false` once the budget is spent.
    pub const fn take(&mut self) -> bool {
        if self.max != 0 && self.used >= self.max {
            return false;
        }
        self.used += 1;
        true
    }

    /// Number of attempts consumed so far
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }
}
