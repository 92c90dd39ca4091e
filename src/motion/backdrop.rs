//! Time-driven state of the decorative 3D backdrop.
//!
//! Nothing here reads scroll or input. [`Backdrop::advance`] is fed frame
//! timestamps and produces a [`Frame`] for the renderer.

use std::f64::consts::{PI, TAU};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }
}

/// Sinusoidal path of the orbiting light and the orb that marks it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightPath {
    pub amplitude: [f64; 3],
    pub frequency: [f64; 3],
    pub intensity_base: f64,
    pub intensity_swing: f64,
    pub intensity_frequency: f64,
    pub orb_scale_base: f64,
    pub orb_scale_swing: f64,
    pub orb_scale_frequency: f64,
}

impl Default for LightPath {
    fn default() -> Self {
        Self {
            amplitude: [10.0, 7.0, 6.0],
            frequency: [0.4, 0.25, 0.6],
            intensity_base: 1.5,
            intensity_swing: 0.5,
            intensity_frequency: 2.0,
            orb_scale_base: 0.4,
            orb_scale_swing: 0.2,
            orb_scale_frequency: 1.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitingLight {
    pub position: Vec3,
    pub intensity: f64,
    pub orb_scale: f64,
}

impl LightPath {
    /// Light state at `elapsed` seconds. x and z follow sine, y cosine.
    pub fn at(&self, elapsed: f64) -> OrbitingLight {
        let [ax, ay, az] = self.amplitude;
        let [fx, fy, fz] = self.frequency;
        OrbitingLight {
            position: Vec3::new(
                ax * (fx * elapsed).sin(),
                ay * (fy * elapsed).cos(),
                az * (fz * elapsed).sin(),
            ),
            intensity: self.intensity_base
                + self.intensity_swing * (self.intensity_frequency * elapsed).sin(),
            orb_scale: self.orb_scale_base
                + self.orb_scale_swing * (self.orb_scale_frequency * elapsed).sin(),
        }
    }
}

/// Auto-rotating orbit camera looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov_y: f64,
    /// Azimuth speed in radians per second.
    pub auto_rotate: f64,
    pub polar: f64,
    pub min_polar: f64,
    pub max_polar: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 30.0,
            fov_y: 75.0,
            // An orbit every two minutes.
            auto_rotate: TAU / 60.0 * 0.5,
            polar: PI / 2.0,
            min_polar: PI / 3.0,
            max_polar: PI / 1.5,
        }
    }
}

impl CameraConfig {
    pub fn clamped_polar(&self) -> f64 {
        self.polar.clamp(self.min_polar, self.max_polar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub particle_count: usize,
    pub inner_radius: f64,
    pub radius_band: f64,
    pub point_size: f64,
    pub point_opacity: f64,
    pub orb_radius: f64,
    /// Radians per second around x and y.
    pub spin: [f64; 2],
    /// Upper bound for a single frame delta, in seconds.
    pub max_frame_delta: f64,
    pub light: LightPath,
    pub camera: CameraConfig,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            inner_radius: 25.0,
            radius_band: 15.0,
            point_size: 0.2,
            point_opacity: 0.3,
            orb_radius: 0.6,
            spin: [0.05, 0.1],
            max_frame_delta: 0.25,
            light: LightPath::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Fixed cloud of points in a spherical shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    points: Vec<Vec3>,
}

impl ParticleField {
    /// Uniform directions (inverse-transform sampling of the polar angle)
    /// at radii uniform in `[inner_radius, inner_radius + band)`.
    pub fn generate(rng: &mut fastrand::Rng, count: usize, inner_radius: f64, band: f64) -> Self {
        let points = (0..count)
            .map(|_| {
                let radius = inner_radius + rng.f64() * band;
                let theta = rng.f64() * TAU;
                let phi = (rng.f64() * 2.0 - 1.0).acos();
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Field rotation wrapped to `[0, 2π)`.
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub camera_azimuth: f64,
    pub light: OrbitingLight,
}

pub struct Backdrop {
    config: BackdropConfig,
    field: ParticleField,
    last_timestamp: Option<f64>,
    elapsed: f64,
    /// Unwrapped field rotation in radians.
    spin_x: f64,
    spin_y: f64,
    azimuth: f64,
}

impl Backdrop {
    pub fn new(config: BackdropConfig, rng: &mut fastrand::Rng) -> Self {
        let field = ParticleField::generate(
            rng,
            config.particle_count,
            config.inner_radius,
            config.radius_band,
        );
        Self {
            config,
            field,
            last_timestamp: None,
            elapsed: 0.0,
            spin_x: 0.0,
            spin_y: 0.0,
            azimuth: 0.0,
        }
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Advances to a frame timestamp in milliseconds, as handed out by
    /// `requestAnimationFrame`. The first timestamp only sets the origin.
    pub fn advance(&mut self, timestamp_ms: f64) -> Frame {
        let delta = match self.last_timestamp {
            Some(last) if timestamp_ms.is_finite() => (timestamp_ms - last) / 1000.0,
            _ => 0.0,
        };
        if timestamp_ms.is_finite() {
            self.last_timestamp = Some(timestamp_ms);
        }
        self.step(delta)
    }

    /// Advances by `delta` seconds. Negative or non-finite deltas count as
    /// zero; long stalls are capped at `max_frame_delta`.
    pub fn step(&mut self, delta: f64) -> Frame {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, self.config.max_frame_delta.max(0.0))
        } else {
            0.0
        };
        self.elapsed += delta;
        self.spin_x += self.config.spin[0] * delta;
        self.spin_y += self.config.spin[1] * delta;
        self.azimuth += self.config.camera.auto_rotate * delta;
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            rotation_x: self.spin_x.rem_euclid(TAU),
            rotation_y: self.spin_y.rem_euclid(TAU),
            camera_azimuth: self.azimuth.rem_euclid(TAU),
            light: self.config.light.at(self.elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(p: &Vec3) -> f64 {
        (p.x * p.x + p.y * p.y + p.z * p.z).sqrt()
    }

    fn backdrop(count: usize) -> Backdrop {
        let config = BackdropConfig {
            particle_count: count,
            ..BackdropConfig::default()
        };
        Backdrop::new(config, &mut fastrand::Rng::with_seed(7))
    }

    #[test]
    fn field_stays_in_shell() {
        let field = ParticleField::generate(&mut fastrand::Rng::with_seed(42), 2000, 25.0, 15.0);
        assert_eq!(field.len(), 2000);
        for p in field.points() {
            let r = length(p);
            assert!((25.0 - 1e-9..40.0 + 1e-9).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn field_covers_both_hemispheres() {
        let field = ParticleField::generate(&mut fastrand::Rng::with_seed(3), 1000, 25.0, 15.0);
        let above = field.points().iter().filter(|p| p.z > 0.0).count();
        assert!(above > 400 && above < 600, "{above} of 1000 above the equator");
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::generate(&mut fastrand::Rng::with_seed(9), 50, 25.0, 15.0);
        let b = ParticleField::generate(&mut fastrand::Rng::with_seed(9), 50, 25.0, 15.0);
        assert_eq!(a, b);
    }

    #[test]
    fn spin_increases_with_irregular_frames() {
        let mut backdrop = backdrop(10);
        let timestamps = [
            0.0, 16.7, 33.3, 34.0, 90.0, 91.0, 5_000.0, 5_016.0, 5_016.5, 60_000.0,
        ];
        let mut last = backdrop.spin_y;
        backdrop.advance(timestamps[0]);
        for &t in &timestamps[1..] {
            backdrop.advance(t);
            let spin = backdrop.spin_y;
            assert!(spin > last, "spin did not grow at t={t}");
            last = spin;
        }
    }

    #[test]
    fn first_frame_sets_origin() {
        let mut backdrop = backdrop(1);
        let frame = backdrop.advance(123_456.0);
        assert_eq!(backdrop.elapsed, 0.0);
        assert_eq!(frame.rotation_y, 0.0);
    }

    #[test]
    fn stalls_are_capped_and_rewinds_ignored() {
        let mut backdrop = backdrop(1);
        backdrop.step(10.0);
        assert!((backdrop.elapsed - 0.25).abs() < 1e-12);
        backdrop.step(-1.0);
        backdrop.step(f64::NAN);
        assert!((backdrop.elapsed - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_wrapped_after_hours() {
        let mut backdrop = backdrop(1);
        // Three hours of 60 Hz frames.
        for _ in 0..(3 * 3600 * 60) {
            backdrop.step(1.0 / 60.0);
        }
        let frame = backdrop.frame();
        assert!((0.0..TAU).contains(&frame.rotation_x));
        assert!((0.0..TAU).contains(&frame.rotation_y));
        assert!((0.0..TAU).contains(&frame.camera_azimuth));
        assert!((backdrop.spin_y - 0.1 * 3.0 * 3600.0).abs() < 1e-3);
    }

    #[test]
    fn light_stays_bounded() {
        let path = LightPath::default();
        for step in 0..10_000 {
            let t = step as f64 * 7.31;
            let light = path.at(t);
            assert!(light.position.x.abs() <= 10.0);
            assert!(light.position.y.abs() <= 7.0);
            assert!(light.position.z.abs() <= 6.0);
            assert!((1.0..=2.0).contains(&light.intensity));
            assert!((0.2..=0.6 + 1e-12).contains(&light.orb_scale));
        }
    }

    #[test]
    fn light_starts_on_y_axis() {
        let light = LightPath::default().at(0.0);
        assert_eq!(light.position, Vec3::new(0.0, 7.0, 0.0));
        assert_eq!(light.intensity, 1.5);
        assert_eq!(light.orb_scale, 0.4);
    }

    #[test]
    fn camera_polar_is_clamped() {
        let camera = CameraConfig {
            polar: 0.1,
            ..CameraConfig::default()
        };
        assert_eq!(camera.clamped_polar(), PI / 3.0);
        assert_eq!(CameraConfig::default().clamped_polar(), PI / 2.0);
    }

    #[test]
    fn rotations_preserve_length() {
        let p = Vec3::new(3.0, -4.0, 12.0);
        assert!((length(&p.rotate_x(1.1)) - 13.0).abs() < 1e-9);
        assert!((length(&p.rotate_y(-2.3)) - 13.0).abs() < 1e-9);
    }
}
