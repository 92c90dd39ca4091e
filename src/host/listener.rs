use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::error::Result;

/// A passive event listener that unregisters itself when dropped.
pub struct PassiveListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl PassiveListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for PassiveListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn stops_firing_after_drop() {
        let document = crate::host::dom::document().unwrap();
        let target: EventTarget = document.create_element("div").unwrap().into();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let listener = PassiveListener::new(&target, "ping", move || counter.set(counter.get() + 1))
            .unwrap();
        target.dispatch_event(&web_sys::Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);

        drop(listener);
        target.dispatch_event(&web_sys::Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn cannot_cancel_the_event() {
        let document = crate::host::dom::document().unwrap();
        let target: EventTarget = document.create_element("div").unwrap().into();

        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        let event = web_sys::Event::new_with_event_init_dict("ping", &init).unwrap();

        let handled = Rc::new(Cell::new(false));
        let _listener = {
            let event = event.clone();
            let handled = handled.clone();
            PassiveListener::new(&target, "ping", move || {
                event.prevent_default();
                handled.set(true);
            })
            .unwrap()
        };

        assert!(target.dispatch_event(&event).unwrap());
        assert!(handled.get());
        assert!(event.cancelable());
        assert!(!event.default_prevented());
    }
}
