//! `requestAnimationFrame` loop with explicit cancellation.
//!
//! [`RafLoop`] re-registers itself every frame until [`RafLoop::stop`] is
//! called or the handle is dropped. The callback receives the frame's
//! `DOMHighResTimeStamp` in milliseconds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::Result;
use crate::host::dom;

type RafClosure = Closure<dyn FnMut(f64)>;

pub struct RafLoop {
    inner: Rc<RafInner>,
}

struct RafInner {
    window: Window,
    /// Closure registered with `requestAnimationFrame`; set once by `start`.
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    /// Id of the pending frame request, used to cancel it.
    raf_id: Cell<Option<i32>>,
}

impl RafLoop {
    /// Creates a loop that is not running yet.
    pub fn new(callback: impl FnMut(f64) + 'static) -> Result<Self> {
        Ok(Self {
            inner: Rc::new(RafInner {
                window: dom::window()?,
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        })
    }

    /// Starts the loop. A no-op when already running.
    pub fn start(&self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            // Weak, otherwise the closure would keep its own owner alive.
            let weak = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.raf_id.set(None);
                if !inner.running.get() {
                    return;
                }

                inner.callback.borrow_mut()(timestamp_ms);

                if inner.running.get() {
                    if let Err(e) = inner.request_frame() {
                        log::warn!("Animation loop stopped: {}", e);
                        inner.running.set(false);
                    }
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        if let Err(e) = self.inner.request_frame() {
            self.inner.running.set(false);
            return Err(e);
        }
        Ok(())
    }

    /// Stops the loop and cancels the pending frame.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.raf_id.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl RafInner {
    fn request_frame(&self) -> Result<()> {
        let closure = self.closure.borrow();
        if let Some(closure) = closure.as_ref() {
            let id = self
                .window
                .request_animation_frame(closure.as_ref().unchecked_ref())?;
            self.raf_id.set(Some(id));
        }
        Ok(())
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn start_and_stop_toggle_running() {
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();
        let raf = RafLoop::new(move |_| counter.set(counter.get() + 1)).unwrap();
        assert!(!raf.is_running());

        raf.start().unwrap();
        assert!(raf.is_running());
        raf.stop();
        assert!(!raf.is_running());
        // The frame was cancelled before it could fire.
        assert_eq!(ticks.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn ticks_arrive_in_order() {
        let stamps = Rc::new(RefCell::new(Vec::new()));
        let sink = stamps.clone();
        let raf = RafLoop::new(move |t| sink.borrow_mut().push(t)).unwrap();
        raf.start().unwrap();
        gloo_timers::future::TimeoutFuture::new(200).await;
        drop(raf);

        let stamps = stamps.borrow();
        assert!(!stamps.is_empty());
        assert!(stamps.windows(2).all(|w| w[1] > w[0]));
    }
}
