use std::rc::Rc;

use log::warn;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::error::{Result, SiteError};
use crate::host::{dom, IntersectionWatcher, PassiveListener};
use crate::motion::{page_progress, SectionEvent, SectionObservation, ViewportObserver};

impl Reducible for SectionObservation {
    type Action = SectionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Browser registrations backing one section's observation record.
struct SectionWatch {
    _watcher: Option<IntersectionWatcher>,
    _scroll: PassiveListener,
    _resize: PassiveListener,
}

fn watch_section(
    section: &NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<SectionObservation>,
) -> Result<SectionWatch> {
    let element = section
        .cast::<Element>()
        .ok_or_else(|| SiteError::MissingElement("section".to_string()))?;
    let window = dom::window()?;

    let watcher = match IntersectionWatcher::observe(&element, threshold) {
        Ok(mut watcher) => {
            let dispatcher = dispatcher.clone();
            let threshold = watcher.threshold();
            watcher.on_threshold_crossed(Box::new(move |ratio| {
                dispatcher.dispatch(SectionEvent::Intersected { ratio, threshold });
            }));
            Some(watcher)
        }
        Err(e) => {
            // Without an observer the section would never animate in.
            warn!("Intersection observer unavailable, showing section as is: {}", e);
            dispatcher.dispatch(SectionEvent::Intersected {
                ratio: 1.0,
                threshold,
            });
            None
        }
    };

    let sample = {
        let window = window.clone();
        move || {
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(f64::NAN);
            dispatcher.dispatch(SectionEvent::Scrolled {
                rect: dom::section_rect(&element),
                viewport_height,
            });
        }
    };
    sample();

    Ok(SectionWatch {
        _watcher: watcher,
        _scroll: PassiveListener::new(&window, "scroll", sample.clone())?,
        _resize: PassiveListener::new(&window, "resize", sample)?,
    })
}

/// Visibility latch and scroll progress of the section behind `section`.
///
/// Everything is unregistered when the component unmounts. If the element
/// is missing the record simply stays at its default.
#[hook]
pub fn use_section_observation(section: NodeRef, threshold: f64) -> SectionObservation {
    let state = use_reducer_eq(SectionObservation::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let watch = match watch_section(&section, threshold, dispatcher) {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        warn!("Section animations disabled: {}", e);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    *state
}

/// Re-measures `measure` on window scroll and resize.
#[hook]
fn use_window_metric<T, F>(initial: T, measure: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: Fn(&Window) -> Option<T> + 'static,
{
    let value = use_state_eq(move || initial);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = dom::window().and_then(|window| {
                    let measure = Rc::new(measure);
                    let sample = {
                        let window = window.clone();
                        move || {
                            if let Some(v) = measure(&window) {
                                value.set(v);
                            }
                        }
                    };
                    sample();
                    Ok((
                        PassiveListener::new(&window, "scroll", sample.clone())?,
                        PassiveListener::new(&window, "resize", sample)?,
                    ))
                });
                let listeners = listeners
                    .map_err(|e| warn!("Scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listeners)
            },
            (),
        );
    }

    (*value).clone()
}

/// Page progress for the hero: one viewport of scrolling maps to 1.
#[hook]
pub fn use_page_progress() -> f64 {
    use_window_metric(0.0, |window| {
        let scroll_y = dom::scroll_y(window).ok()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(page_progress(scroll_y, height))
    })
}

/// Whether the page has been scrolled further than `offset` pixels.
#[hook]
pub fn use_scrolled_past(offset: f64) -> bool {
    use_window_metric(false, move |window| {
        dom::scroll_y(window).ok().map(|y| y > offset)
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct ObservedProps {
        on_render: Callback<SectionObservation>,
    }

    #[function_component(ObservedSection)]
    fn observed_section(props: &ObservedProps) -> Html {
        let section = use_node_ref();
        let observation = use_section_observation(section.clone(), 0.1);
        props.on_render.emit(observation);
        html! {
            <section ref={section} id="observed-section" style="height: 300px;">
                {"observed"}
            </section>
        }
    }

    fn fire(event: &str) {
        dom::window()
            .unwrap()
            .dispatch_event(&Event::new(event).unwrap())
            .unwrap();
    }

    #[wasm_bindgen_test]
    async fn samples_on_mount_and_releases_on_unmount() {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let on_render = Callback::from(move |observation: SectionObservation| {
            sink.borrow_mut().push(observation)
        });
        let app = yew::Renderer::<ObservedSection>::with_root_and_props(
            root.clone(),
            ObservedProps { on_render },
        )
        .render();

        // No scroll event has been dispatched yet.
        TimeoutFuture::new(150).await;
        let mounted = *reports.borrow().last().unwrap();
        assert!(mounted.progress > 0.0);
        assert!(mounted.has_been_visible);

        let section: HtmlElement = document
            .get_element_by_id("observed-section")
            .unwrap()
            .unchecked_into();
        section.style().set_property("margin-top", "200px").unwrap();
        fire("scroll");
        TimeoutFuture::new(50).await;
        let scrolled = *reports.borrow().last().unwrap();
        assert!(scrolled.progress < mounted.progress);
        assert!(scrolled.has_been_visible);

        app.destroy();
        let renders = reports.borrow().len();
        fire("scroll");
        fire("resize");
        TimeoutFuture::new(50).await;
        assert_eq!(reports.borrow().len(), renders);
        root.remove();
    }
}
