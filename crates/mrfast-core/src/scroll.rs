//! Navigation bar scroll style

/// Offset past which the navigation bar switches to its solid style
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Tracks whether the viewport has scrolled past the threshold
///
/// The comparison is strict: an offset of exactly `threshold` is not scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Record a new vertical offset. Returns true if the flag flipped.
    pub fn observe(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold;
        let changed = scrolled != self.scrolled;
        if changed {
            tracing::trace!(offset_y, scrolled, "navigation scroll style changed");
        }
        self.scrolled = scrolled;
        changed
    }
}
