//! Per-section observation record.
//!
//! Each animated section owns exactly one [`SectionObservation`] and updates
//! it only from its own intersection and scroll handlers.

use super::progress::{scroll_progress, SectionRect};
use super::visibility::crosses;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionObservation {
    pub has_been_visible: bool,
    pub progress: f64,
}

/// Events a section's handlers feed into its observation record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionEvent {
    Intersected { ratio: f64, threshold: f64 },
    Scrolled { rect: SectionRect, viewport_height: f64 },
}

impl SectionObservation {
    /// Returns the record after `event`. Visibility only ever goes from
    /// `false` to `true`; progress is only replaced while the section is in
    /// the viewport band.
    pub fn apply(self, event: SectionEvent) -> Self {
        match event {
            SectionEvent::Intersected { ratio, threshold } => Self {
                has_been_visible: self.has_been_visible || crosses(ratio, threshold),
                ..self
            },
            SectionEvent::Scrolled {
                rect,
                viewport_height,
            } => Self {
                progress: scroll_progress(rect, viewport_height).unwrap_or(self.progress),
                ..self
            },
        }
    }
}
