/// Logical clock of a simulation.
///
/// Advanced exactly once per page access. Frames record the clock value of
/// their most recent load or hit, which is what recency-based policies compare.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogicalClock {
    now: u64,
}

impl LogicalClock {
    /// Creates a new clock, positioned at 0 (no accesses yet).
    #[must_use]
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Creates a clock positioned at the given value.
    #[cfg(test)]
    pub(crate) const fn at(now: u64) -> Self {
        Self { now }
    }

    /// Current clock value.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock and returns the new value.
    ///
    /// Whenever maximum value is reached, the function returns `None` and the
    /// clock stays where it is.
    pub fn tick(&mut self) -> Option<u64> {
        self.now = self.now.checked_add(1)?;
        Some(self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_inc() {
        let mut clock = LogicalClock::new();
        assert_eq!(clock.now(), 0);

        let mut prev = 0u64;
        for _ in 0..1000 {
            let now = clock.tick().expect("clock exhausted");
            assert_eq!(now - prev, 1);
            assert_eq!(clock.now(), now);
            prev = now;
        }
    }

    #[test]
    fn exhausted() {
        let mut clock = LogicalClock { now: u64::MAX - 1 };
        assert_eq!(clock.tick(), Some(u64::MAX));
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.now(), u64::MAX);
    }
}
