use log::{debug, warn};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config;
use crate::error::{Result, SiteError};
use crate::host::{dom, BackdropPainter, RafLoop};
use crate::motion::Backdrop;

/// Seeds the particle field so every page load gets a fresh layout.
fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn start_backdrop(canvas_ref: &NodeRef) -> Result<RafLoop> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| SiteError::MissingElement("backdrop canvas".to_string()))?;
    let painter = BackdropPainter::new(canvas)?;
    let window = dom::window()?;

    let mut rng = fastrand::Rng::with_seed(seed());
    let mut backdrop = Backdrop::new(config::site().backdrop, &mut rng);
    if backdrop.field().is_empty() {
        debug!("Backdrop started without particles");
    } else {
        debug!("Backdrop started with {} particles", backdrop.field().len());
    }

    let mut reported = false;
    let raf = RafLoop::new(move |timestamp_ms| {
        let frame = backdrop.advance(timestamp_ms);
        let painted = dom::viewport(&window).and_then(|viewport| {
            let ratio = dom::pixel_ratio(&window);
            painter.paint(backdrop.field(), backdrop.config(), &frame, viewport, ratio)
        });
        if let Err(e) = painted {
            if !reported {
                warn!("Backdrop frame failed: {}", e);
                reported = true;
            }
        }
    })?;
    raf.start()?;
    Ok(raf)
}

/// Full-viewport animated particle field behind the page content.
#[function_component(BackdropCanvas)]
pub fn backdrop_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let raf = match start_backdrop(&canvas_ref) {
                    Ok(raf) => Some(raf),
                    Err(e) => {
                        warn!("Backdrop disabled: {}", e);
                        None
                    }
                };
                // Dropping the loop cancels the pending frame.
                move || drop(raf)
            },
            (),
        );
    }

    html! {
        <div class="backdrop" aria-hidden="true">
            <style>
                {r#"
                    .backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .backdrop canvas {
                        display: block;
                        width: 100%;
                        height: 100%;
                    }
                "#}
            </style>
            <canvas ref={canvas_ref} />
        </div>
    }
}
