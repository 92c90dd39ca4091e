//! Scroll progress of a section through the viewport.

/// Bounding box of a section relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// `top < viewport_height && top + height > 0`.
    pub fn intersects(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.top + self.height > 0.0
    }
}

/// Progress of `rect` through a viewport of `viewport_height`.
///
/// `None` while the section is outside the viewport band or any input is
/// non-finite; callers keep their previous value in that case.
pub fn scroll_progress(rect: SectionRect, viewport_height: f64) -> Option<f64> {
    if !(rect.top.is_finite() && rect.height.is_finite() && viewport_height.is_finite()) {
        return None;
    }
    if !rect.intersects(viewport_height) {
        return None;
    }
    let span = viewport_height + rect.height;
    if span <= 0.0 {
        return None;
    }
    Some(((viewport_height - rect.top) / span).clamp(0.0, 1.0))
}

/// Whole-page progress used by the hero: one viewport of scrolling maps to 1.
pub fn page_progress(scroll_y: f64, viewport_height: f64) -> f64 {
    if !(scroll_y.is_finite() && viewport_height.is_finite()) || viewport_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / viewport_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partially_scrolled_section() {
        let p = scroll_progress(SectionRect::new(400.0, 600.0), 800.0).unwrap();
        assert!((p - 400.0 / 1400.0).abs() < 1e-12);
        assert!((p - 0.2857).abs() < 1e-4);
    }

    #[test]
    fn section_above_viewport_is_out_of_band() {
        // -700 < 800 holds, but -700 + 600 = -100 is not > 0.
        assert_eq!(scroll_progress(SectionRect::new(-700.0, 600.0), 800.0), None);
        assert_eq!(scroll_progress(SectionRect::new(-600.0, 600.0), 800.0), None);
    }

    #[test]
    fn section_below_viewport_is_out_of_band() {
        assert_eq!(scroll_progress(SectionRect::new(800.0, 600.0), 800.0), None);
        assert_eq!(scroll_progress(SectionRect::new(5000.0, 600.0), 800.0), None);
    }

    #[test]
    fn entering_and_leaving_edges() {
        let entering = scroll_progress(SectionRect::new(799.0, 600.0), 800.0).unwrap();
        assert!(entering < 0.001);

        let leaving = scroll_progress(SectionRect::new(-599.0, 600.0), 800.0).unwrap();
        assert!(leaving > 0.99);
    }

    #[test]
    fn always_within_unit_interval() {
        let tops = [-1e9, -5000.0, -800.0, -1.0, 0.0, 0.5, 300.0, 799.9, 800.0, 1e9];
        let heights = [0.0, 0.1, 10.0, 600.0, 3000.0, 1e9];
        let viewports = [1.0, 320.0, 800.0, 2160.0];
        for &top in &tops {
            for &height in &heights {
                for &vh in &viewports {
                    let Some(p) = scroll_progress(SectionRect::new(top, height), vh) else {
                        continue;
                    };
                    assert!((0.0..=1.0).contains(&p), "top={top} h={height} vh={vh} -> {p}");
                }
            }
        }
    }

    #[test]
    fn non_finite_input_is_ignored() {
        assert_eq!(scroll_progress(SectionRect::new(f64::NAN, 600.0), 800.0), None);
        assert_eq!(scroll_progress(SectionRect::new(0.0, f64::INFINITY), 800.0), None);
        assert_eq!(scroll_progress(SectionRect::new(0.0, 600.0), f64::NAN), None);
    }

    #[test]
    fn page_progress_saturates() {
        assert_eq!(page_progress(0.0, 800.0), 0.0);
        assert_eq!(page_progress(400.0, 800.0), 0.5);
        assert_eq!(page_progress(4000.0, 800.0), 1.0);
        assert_eq!(page_progress(-30.0, 800.0), 0.0);
        assert_eq!(page_progress(100.0, 0.0), 0.0);
    }
}
