//! Perspective projection for the orbit camera.

use super::backdrop::{CameraConfig, Vec3};

const NEAR: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

impl Viewport {
    /// Falls back to 1 for ratios a browser should never report.
    pub fn normalize_pixel_ratio(ratio: f64) -> f64 {
        if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        }
    }

    /// Canvas backing-store size in device pixels.
    pub fn backing_size(&self, pixel_ratio: f64) -> (u32, u32) {
        let ratio = Self::normalize_pixel_ratio(pixel_ratio);
        let side = |css: f64| (css.max(0.0) * ratio).round() as u32;
        (side(self.width), side(self.height))
    }
}

/// Camera orbiting the origin, posed for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    distance: f64,
    azimuth: f64,
    tilt: f64,
    focal: f64,
    center_x: f64,
    center_y: f64,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig, azimuth: f64, viewport: Viewport) -> Self {
        let half_fov = (config.fov_y.clamp(1.0, 179.0) / 2.0).to_radians();
        Self {
            distance: config.distance,
            azimuth,
            tilt: std::f64::consts::FRAC_PI_2 - config.clamped_polar(),
            focal: (viewport.height / 2.0) / half_fov.tan(),
            center_x: viewport.width / 2.0,
            center_y: viewport.height / 2.0,
        }
    }

    /// Screen position of a world point, `None` behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<ScreenPoint> {
        let view = point.rotate_y(-self.azimuth).rotate_x(self.tilt);
        let depth = self.distance - view.z;
        if depth <= NEAR {
            return None;
        }
        let scale = self.focal / depth;
        Some(ScreenPoint {
            x: self.center_x + view.x * scale,
            y: self.center_y - view.y * scale,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const VIEW: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn backing_store_follows_pixel_ratio() {
        assert_eq!(VIEW.backing_size(1.0), (1200, 800));
        assert_eq!(VIEW.backing_size(2.0), (2400, 1600));
        assert_eq!(VIEW.backing_size(1.5), (1800, 1200));
    }

    #[test]
    fn odd_pixel_ratios_fall_back_to_one() {
        assert_eq!(VIEW.backing_size(0.0), (1200, 800));
        assert_eq!(VIEW.backing_size(f64::NAN), (1200, 800));
        assert_eq!(VIEW.backing_size(-2.0), (1200, 800));
        let empty = Viewport {
            width: -5.0,
            height: 0.0,
        };
        assert_eq!(empty.backing_size(2.0), (0, 0));
    }

    #[test]
    fn origin_projects_to_center() {
        let camera = OrbitCamera::new(&CameraConfig::default(), 1.3, VIEW);
        let p = camera.project(Vec3::default()).unwrap();
        assert!((p.x - 600.0).abs() < 1e-9);
        assert!((p.y - 400.0).abs() < 1e-9);
        // focal = 400 / tan(37.5°), seen from 30 units away.
        let focal = 400.0 / 37.5f64.to_radians().tan();
        assert!((p.scale - focal / 30.0).abs() < 1e-9);
    }

    #[test]
    fn up_is_up_on_screen() {
        let camera = OrbitCamera::new(&CameraConfig::default(), 0.0, VIEW);
        let p = camera.project(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!(p.y < 400.0);
    }

    #[test]
    fn nearer_points_are_larger() {
        let camera = OrbitCamera::new(&CameraConfig::default(), 0.0, VIEW);
        let near = camera.project(Vec3::new(0.0, 0.0, 20.0)).unwrap();
        let far = camera.project(Vec3::new(0.0, 0.0, -20.0)).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = OrbitCamera::new(&CameraConfig::default(), 0.0, VIEW);
        assert!(camera.project(Vec3::new(0.0, 0.0, 35.0)).is_none());
    }

    #[test]
    fn quarter_orbit_brings_side_point_to_front() {
        // Azimuth π/2 puts the camera on +x.
        let camera = OrbitCamera::new(&CameraConfig::default(), FRAC_PI_2, VIEW);
        let p = camera.project(Vec3::new(10.0, 0.0, 0.0)).unwrap();
        let center = camera.project(Vec3::default()).unwrap();
        assert!((p.scale - center.scale * 30.0 / 20.0).abs() < 1e-9);
        assert!((p.x - 600.0).abs() < 1e-6);
    }
}
