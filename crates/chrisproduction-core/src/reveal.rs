//! Scroll-triggered reveal latches.
//!
//! Each page section fades in the first time enough of it scrolls into view
//! and then stays visible.

/// Default fraction of a section that must be visible.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// One-way visibility latch for a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    /// Create an unrevealed latch. The threshold is clamped to `[0, 1]`;
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Visible fraction required to trip the latch.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the section has been revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection notification and return the latch state.
    ///
    /// `ratio` is the visible fraction of the section's bounding box.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if !self.revealed && is_intersecting && ratio >= self.threshold {
            self.revealed = true;
        }
        self.revealed
    }
}

/// Transition delay for the `index`-th item of a staggered grid.
#[must_use]
pub const fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(latch.threshold(), 0.1);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(false, 0.0));
    }

    #[test]
    fn test_reveals_at_threshold_and_stays() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.1));
        assert!(latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.02));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), 0.1);
    }

    #[test]
    fn test_zero_threshold_needs_intersection() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.0));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(3, 150), 450);
        assert_eq!(stagger_delay_ms(usize::MAX, 50), u32::MAX);
    }
}
