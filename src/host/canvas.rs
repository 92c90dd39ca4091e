//! Paints backdrop frames onto a 2D canvas.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, SiteError};
use crate::motion::backdrop::{BackdropConfig, ParticleField};
use crate::motion::{Frame, OrbitCamera, Viewport};

const MAX_POINT_PX: f64 = 6.0;

pub struct BackdropPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl BackdropPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or(SiteError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::NoCanvasContext)?;
        Ok(Self { canvas, context })
    }

    /// Matches the backing store to the viewport in device pixels. Drawing
    /// stays in CSS pixels through the context transform.
    fn fit(&self, viewport: Viewport, pixel_ratio: f64) -> Result<()> {
        let ratio = Viewport::normalize_pixel_ratio(pixel_ratio);
        let (width, height) = viewport.backing_size(ratio);
        if self.canvas.width() == width && self.canvas.height() == height {
            return Ok(());
        }
        // Resizing resets the context state, transform included.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        Ok(())
    }

    #[allow(deprecated)]
    pub fn paint(
        &self,
        field: &ParticleField,
        config: &BackdropConfig,
        frame: &Frame,
        viewport: Viewport,
        pixel_ratio: f64,
    ) -> Result<()> {
        self.fit(viewport, pixel_ratio)?;
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        let camera = OrbitCamera::new(&config.camera, frame.camera_azimuth, viewport);

        ctx.set_global_alpha(config.point_opacity);
        ctx.set_fill_style(&JsValue::from_str("#000000"));
        for point in field.points() {
            let world = point.rotate_x(frame.rotation_x).rotate_y(frame.rotation_y);
            let Some(screen) = camera.project(world) else {
                continue;
            };
            let size = (config.point_size * screen.scale).min(MAX_POINT_PX);
            ctx.fill_rect(screen.x - size / 2.0, screen.y - size / 2.0, size, size);
        }

        let light = &frame.light;
        if let Some(orb) = camera.project(light.position) {
            let radius = config.orb_radius * light.orb_scale * orb.scale;

            // Halo grows with the light's intensity.
            let halo = radius * (2.0 + light.intensity * 2.0);
            let gradient = ctx.create_radial_gradient(orb.x, orb.y, radius, orb.x, orb.y, halo)?;
            let alpha = (0.04 * light.intensity).clamp(0.0, 1.0);
            gradient.add_color_stop(0.0, &format!("rgba(0, 0, 0, {:.3})", alpha))?;
            gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
            ctx.set_global_alpha(1.0);
            ctx.set_fill_style(gradient.as_ref());
            ctx.begin_path();
            ctx.arc(orb.x, orb.y, halo, 0.0, std::f64::consts::TAU)?;
            ctx.fill();

            ctx.set_global_alpha(0.3);
            ctx.set_fill_style(&JsValue::from_str("#000000"));
            ctx.begin_path();
            ctx.arc(orb.x, orb.y, radius, 0.0, std::f64::consts::TAU)?;
            ctx.fill();
        }

        ctx.set_global_alpha(1.0);
        Ok(())
    }
}
