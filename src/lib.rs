//! A small retained-mode 2D scene-graph toolkit.
//!
//! Shapes (rectangles, ovals, lines, text, polygons, groups) are drawn onto
//! a [`Surface`], composed into a [`Window`] and bound to mouse input
//! through a geometric overlap test. Every shape is a polymorphic node
//! exposing three operations: `draw` (which also reports whether the shape
//! wants to stay in the draw list), `register_for` (attach its event nodes
//! to a raw mouse source) and `register` (subscribe its visual state to an
//! invalidation sink).
//!
//! The core is platform-independent: all host collaborators (drawing
//! surface, raw input source, native frame) are traits, so everything can
//! be tested with regular unit tests, without needing any kind of window
//! environment. A native backend built on `winit` and `softbuffer` is
//! available behind the `wrapper` feature.

mod color;
mod event;
mod fake;
mod geom;
mod shape;
mod surface;
mod time;
mod window;
#[cfg(feature = "wrapper")]
mod wrapper;

pub use color::*;
pub use event::*;
pub use fake::*;
pub use geom::*;
pub use shape::*;
pub use surface::*;
pub use time::*;
pub use window::*;
#[cfg(feature = "wrapper")]
pub use wrapper::*;
