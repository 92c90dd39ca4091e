//! Scroll choreography and backdrop animation, independent of the browser.

pub mod backdrop;
pub mod observation;
pub mod presentation;
pub mod progress;
pub mod projection;
pub mod visibility;

pub use backdrop::{Backdrop, BackdropConfig, Frame};
pub use observation::{SectionEvent, SectionObservation};
pub use presentation::{present, EffectCoefficients};
pub use progress::{page_progress, SectionRect};
pub use projection::{OrbitCamera, Viewport};
pub use visibility::{VisibilityLatch, ViewportObserver};
