//! First-sighting latch for page sections.
//!
//! A section starts hidden and flips to visible the first time the host
//! reports that enough of it is on screen. It never flips back, so entrance
//! animations play once per page load.

/// Source of viewport-intersection reports for one element.
///
/// The browser implementation wraps `IntersectionObserver`, but any host
/// able to report "this fraction of the element is visible" fits.
pub trait ViewportObserver {
    /// Fraction of the element (0..=1) that has to be visible to count.
    fn threshold(&self) -> f64;

    /// Registers `callback`, called with the visible fraction whenever the
    /// host reports a crossing. Replaces any earlier callback.
    fn on_threshold_crossed(&mut self, callback: Box<dyn FnMut(f64)>);
}

/// Monotonic hidden -> visible flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the latch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || !crosses(ratio, self.threshold) {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Whether a visible fraction counts as "seen" for the given threshold.
///
/// A zero threshold still needs some part of the element on screen.
/// Ratios within [`RATIO_TOLERANCE`] below the threshold count, since the
/// crossing report can carry a rounded ratio and is not repeated.
pub fn crosses(ratio: f64, threshold: f64) -> bool {
    ratio.is_finite() && ratio > 0.0 && ratio >= clamp_threshold(threshold) - RATIO_TOLERANCE
}

/// Slack for layout rounding in reported intersection ratios.
pub const RATIO_TOLERANCE: f64 = 1e-3;

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}
