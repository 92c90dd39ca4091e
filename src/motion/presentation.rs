//! Maps visibility and scroll progress to CSS transform/opacity values.
//!
//! Everything here is a pure function of its inputs. The per-section
//! coefficients are styling parameters loaded from the site config.

use serde::Deserialize;

/// Pose of a section element while it is still hidden.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RestingPose {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for RestingPose {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 10.0,
            scale: 0.9,
            opacity: 0.0,
        }
    }
}

/// Column-dependent vertical offset, as used by card grids.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stagger {
    pub columns: u32,
    pub step: f64,
    pub gain: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            columns: 3,
            step: 20.0,
            gain: 0.5,
        }
    }
}

impl Stagger {
    /// `((index mod columns) * step - step) * gain`
    pub fn offset(&self, index: usize) -> f64 {
        let columns = self.columns.max(1) as usize;
        ((index % columns) as f64 * self.step - self.step) * self.gain
    }
}

/// Entrance transition delay: `base + step * index` seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Delay {
    pub base: f64,
    pub step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectCoefficients {
    /// Pixels of translation per unit of progress.
    pub translate_x: f64,
    pub translate_y: f64,
    pub stagger: Option<Stagger>,
    /// Flip the translation sign on odd indices.
    pub alternate_translate: bool,
    pub scale_base: f64,
    pub scale_gain: f64,
    /// Degrees of rotation per unit of progress.
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Flip the rotation sign on odd indices.
    pub alternate_rotate: bool,
    pub opacity_base: f64,
    pub opacity_gain: f64,
    pub delay: Delay,
    pub hidden: RestingPose,
}

impl Default for EffectCoefficients {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            stagger: None,
            alternate_translate: false,
            scale_base: 1.0,
            scale_gain: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            alternate_rotate: false,
            opacity_base: 1.0,
            opacity_gain: 0.0,
            delay: Delay::default(),
            hidden: RestingPose::default(),
        }
    }
}

impl EffectCoefficients {
    pub fn hero() -> Self {
        Self {
            translate_y: -50.0,
            scale_gain: -0.1,
            opacity_gain: -0.5,
            delay: Delay { base: 0.1, step: 0.0 },
            hidden: RestingPose {
                translate_y: 80.0,
                scale: 1.0,
                ..RestingPose::default()
            },
            ..Self::default()
        }
    }

    pub fn about_title() -> Self {
        Self {
            translate_x: -50.0,
            scale_base: 0.95,
            scale_gain: 0.05,
            rotate_y: -5.0,
            opacity_base: 0.5,
            opacity_gain: 0.5,
            delay: Delay { base: 0.1, step: 0.0 },
            hidden: RestingPose {
                translate_x: -10.0,
                translate_y: 0.0,
                scale: 0.95,
                opacity: 0.0,
            },
            ..Self::default()
        }
    }

    pub fn about_body() -> Self {
        Self {
            translate_x: 50.0,
            rotate_y: 5.0,
            delay: Delay { base: 0.2, step: 0.0 },
            hidden: RestingPose {
                translate_x: 10.0,
                ..Self::about_title().hidden
            },
            ..Self::about_title()
        }
    }

    pub fn about_stats() -> Self {
        Self {
            translate_y: 30.0,
            alternate_translate: true,
            scale_base: 0.9,
            scale_gain: 0.1,
            opacity_base: 0.3,
            opacity_gain: 0.7,
            delay: Delay { base: 0.8, step: 0.1 },
            ..Self::default()
        }
    }

    pub fn service_card() -> Self {
        Self {
            stagger: Some(Stagger::default()),
            scale_base: 0.9,
            scale_gain: 0.1,
            rotate_x: 2.0,
            alternate_rotate: true,
            opacity_base: 0.3,
            opacity_gain: 0.7,
            delay: Delay { base: 0.2, step: 0.1 },
            ..Self::default()
        }
    }

    pub fn contact() -> Self {
        Self {
            translate_y: 30.0,
            scale_base: 0.95,
            scale_gain: 0.05,
            opacity_base: 0.4,
            opacity_gain: 0.6,
            delay: Delay { base: 0.1, step: 0.0 },
            hidden: RestingPose {
                scale: 0.95,
                ..RestingPose::default()
            },
            ..Self::default()
        }
    }

    /// Entrance transition delay in seconds for the element at `index`.
    pub fn transition_delay(&self, index: usize) -> f64 {
        self.delay.base + self.delay.step * index as f64
    }

    /// Vertical stagger offset for `index`, zero without a stagger.
    pub fn stagger_offset(&self, index: usize) -> f64 {
        self.stagger.map(|s| s.offset(index)).unwrap_or(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Presentation {
    fn resting(pose: &RestingPose) -> Self {
        Self {
            opacity: pose.opacity,
            translate_x: pose.translate_x,
            translate_y: pose.translate_y,
            scale: pose.scale,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate_x, self.rotate_y
        )
    }

    /// Inline style declarations for the element.
    pub fn style(&self) -> String {
        format!("transform: {}; opacity: {:.3};", self.transform(), self.opacity)
    }
}

/// Visual parameters for element `index` of a section.
///
/// While `visible` is false the coefficients' resting pose is returned no
/// matter what `progress` is.
pub fn present(
    visible: bool,
    progress: f64,
    index: usize,
    coefficients: &EffectCoefficients,
) -> Presentation {
    if !visible {
        return Presentation::resting(&coefficients.hidden);
    }

    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let odd = index % 2 == 1;
    let translate_sign = if coefficients.alternate_translate && odd { -1.0 } else { 1.0 };
    let rotate_sign = if coefficients.alternate_rotate && odd { -1.0 } else { 1.0 };

    Presentation {
        opacity: (coefficients.opacity_base + p * coefficients.opacity_gain).clamp(0.0, 1.0),
        translate_x: p * coefficients.translate_x * translate_sign,
        translate_y: p
            * (coefficients.translate_y + coefficients.stagger_offset(index))
            * translate_sign,
        scale: coefficients.scale_base + p * coefficients.scale_gain,
        rotate_x: p * coefficients.rotate_x * rotate_sign,
        rotate_y: p * coefficients.rotate_y * rotate_sign,
    }
}
