use std::rc::Rc;

use crate::{MouseSource, Surface};

mod button;
mod grid;
mod group;
mod labeled;
mod line;
mod oval;
mod polygon;
mod rect;
mod text;

pub use button::*;
pub use grid::*;
pub use group::*;
pub use labeled::*;
pub use line::*;
pub use oval::*;
pub use polygon::*;
pub use rect::*;
pub use text::*;

/// Something that can be told its visual state went stale and it should be
/// painted again.
///
/// Windows hand a `Redrawable` down to their shapes when they are shown, and
/// mutable parts like animated sizes or swappable colors keep hold of it so
/// they can request a repaint the moment they change.
pub trait Redrawable {
    /// Requests that whatever this invalidation sink belongs to gets painted
    /// again soon.
    fn request_redraw(&self);
}

/// Tells whether a shape wants to stay in its container after a draw pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Liveness {
    /// The shape painted itself and should be kept.
    Alive,
    /// The shape is done and should be removed from its container.
    Removed,
}

/// The things every part of a scene can do: paint itself, hook into mouse
/// input and subscribe to repaint requests.
///
/// Shapes are retained: a window keeps its shapes around and draws them
/// again on every repaint, so `draw` must be prepared to run any number of
/// times.
pub trait Shape {
    /// Paints this shape onto the given surface and reports whether it
    /// should stay in its container.
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness;

    /// Gives this shape the chance to install its mouse listeners on the
    /// given source. Shapes without mouse behavior do nothing here.
    fn register_for(&self, source: &dyn MouseSource);

    /// Subscribes the given invalidation sink to every mutable part of this
    /// shape, so changes to those parts trigger a repaint.
    fn register(&self, redrawable: &Rc<dyn Redrawable>);
}
