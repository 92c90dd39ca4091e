//! Browser bindings: DOM access, listeners, observers, frame loop, canvas.
//!
//! Every handle here releases its browser registration on drop.

pub mod canvas;
pub mod dom;
pub mod listener;
pub mod observer;
pub mod raf;

pub use canvas::BackdropPainter;
pub use listener::PassiveListener;
pub use observer::IntersectionWatcher;
pub use raf::RafLoop;
