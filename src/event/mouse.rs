use std::rc::Rc;

use crate::{Area, Pos2D};

/// Receives the mouse events of a [`MouseSource`].
///
/// Every method has a do-nothing default implementation, so listeners only
/// implement the events they actually care about.
pub trait MouseListener {
    /// Called when a mouse button is pressed at the given position.
    fn on_press(&self, _pos: Pos2D) {}

    /// Called when a mouse button is released at the given position.
    fn on_release(&self, _pos: Pos2D) {}

    /// Called when a full click (press followed by release without much
    /// movement) happened at the given position.
    fn on_click(&self, _pos: Pos2D) {}

    /// Called when the mouse cursor moved to the given position.
    fn on_move(&self, _pos: Pos2D) {}

    /// Called when the mouse wheel turned by the given amount. Positive
    /// amounts scroll away from the user.
    fn on_wheel(&self, _amount: i32) {}
}

/// Something that produces mouse events, typically the window a scene is
/// shown in. Event handlers subscribe themselves with
/// [`register`](MouseSource::register).
pub trait MouseSource {
    /// Subscribes the given listener to all future mouse events of this
    /// source.
    fn register(&self, listener: Box<dyn MouseListener>);
}

/// An event handler that can attach itself to the part of a shape it should
/// react to.
///
/// The handler gets the area of the shape it is installed on and only fires
/// for events that land inside it.
pub trait ShapeTarget {
    /// Installs this handler on the given source, restricted to events
    /// inside the given area.
    fn register_for(&self, source: &dyn MouseSource, overlap: Rc<dyn Area>);
}
