//! `IntersectionObserver` behind the [`ViewportObserver`] trait.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::motion::{VisibilityLatch, ViewportObserver};

type Slot = Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>;
type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and forwards intersection ratios until the element
/// has been seen once, then disconnects. Dropping it disconnects too.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    threshold: f64,
    slot: Slot,
    _callback: EntriesClosure,
}

impl IntersectionWatcher {
    pub fn observe(element: &Element, threshold: f64) -> Result<Self> {
        let slot: Slot = Rc::new(RefCell::new(None));
        let mut latch = VisibilityLatch::new(threshold);
        let threshold = latch.threshold();

        let callback = {
            let slot = slot.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let ratios = entries.iter().map(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    }
                });
                if deliver(&mut latch, ratios, &slot) {
                    observer.disconnect();
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            threshold,
            slot,
            _callback: callback,
        })
    }
}

/// Forwards one batch of reports until the latch flips. Returns `true` for
/// the batch that flipped it; the caller disconnects then.
fn deliver(latch: &mut VisibilityLatch, ratios: impl IntoIterator<Item = f64>, slot: &Slot) -> bool {
    // Reports queued before the disconnect are dropped.
    if latch.is_visible() {
        return false;
    }
    for ratio in ratios {
        if let Some(forward) = slot.borrow_mut().as_mut() {
            forward(ratio);
        }
        if latch.observe(ratio) {
            return true;
        }
    }
    false
}

impl ViewportObserver for IntersectionWatcher {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn on_threshold_crossed(&mut self, callback: Box<dyn FnMut(f64)>) {
        *self.slot.borrow_mut() = Some(callback);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_slot() -> (Slot, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let forward: Box<dyn FnMut(f64)> = Box::new(move |ratio| sink.borrow_mut().push(ratio));
        (Rc::new(RefCell::new(Some(forward))), seen)
    }

    #[test]
    fn stops_at_the_crossing_report() {
        let (slot, seen) = recording_slot();
        let mut latch = VisibilityLatch::new(0.3);

        assert!(!deliver(&mut latch, [0.0, 0.1], &slot));
        assert!(deliver(&mut latch, [0.2, 0.35, 0.9], &slot));
        assert_eq!(*seen.borrow(), vec![0.0, 0.1, 0.2, 0.35]);
        assert!(latch.is_visible());
    }

    #[test]
    fn batches_after_the_flip_are_ignored() {
        let (slot, seen) = recording_slot();
        let mut latch = VisibilityLatch::new(0.3);
        assert!(deliver(&mut latch, [0.5], &slot));

        assert!(!deliver(&mut latch, [0.05, 0.8], &slot));
        assert_eq!(*seen.borrow(), vec![0.5]);
    }

    #[test]
    fn empty_slot_still_latches() {
        let slot: Slot = Rc::new(RefCell::new(None));
        let mut latch = VisibilityLatch::new(0.1);
        assert!(deliver(&mut latch, [0.4], &slot));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use web_sys::HtmlElement;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SETTLE_MS: u32 = 150;

    fn placed_box(top_px: u32) -> HtmlElement {
        let document = crate::host::dom::document().unwrap();
        let element: HtmlElement = document.create_element("section").unwrap().unchecked_into();
        let style = element.style();
        style.set_property("position", "absolute").unwrap();
        style.set_property("left", "0").unwrap();
        style.set_property("width", "100px").unwrap();
        style.set_property("height", "100px").unwrap();
        move_to(&element, top_px);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn move_to(element: &HtmlElement, top_px: u32) {
        element
            .style()
            .set_property("top", &format!("{}px", top_px))
            .unwrap();
    }

    fn counting(watcher: &mut IntersectionWatcher) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        watcher.on_threshold_crossed(Box::new(move |ratio| sink.borrow_mut().push(ratio)));
        seen
    }

    #[wasm_bindgen_test]
    async fn disconnects_after_first_crossing() {
        let element = placed_box(0);
        let mut watcher = IntersectionWatcher::observe(&element, 0.1).unwrap();
        let seen = counting(&mut watcher);

        TimeoutFuture::new(SETTLE_MS).await;
        let forwarded = seen.borrow().len();
        assert!(forwarded >= 1);
        assert!(seen.borrow().iter().any(|&ratio| ratio >= 0.1));

        move_to(&element, 20_000);
        TimeoutFuture::new(SETTLE_MS).await;
        move_to(&element, 0);
        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(seen.borrow().len(), forwarded);

        drop(watcher);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropping_disconnects() {
        let element = placed_box(20_000);
        let mut watcher = IntersectionWatcher::observe(&element, 0.1).unwrap();
        let seen = counting(&mut watcher);

        // The initial report for an off-screen element carries ratio 0.
        TimeoutFuture::new(SETTLE_MS).await;
        let forwarded = seen.borrow().len();
        assert!(seen.borrow().iter().all(|&ratio| ratio == 0.0));

        drop(watcher);
        move_to(&element, 0);
        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(seen.borrow().len(), forwarded);
        element.remove();
    }
}
