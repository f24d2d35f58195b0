use std::rc::Rc;

use log::trace;

use crate::{Area, MouseListener, MouseSource, Pos, Pos2D, ShapeTarget};

/// A [`ShapeTarget`] that runs an action every time a mouse button is
/// pressed inside the shape it is installed on.
pub struct Press {
    action: Rc<dyn Fn(Pos2D)>,
}

impl Press {
    /// Constructs a `Press` that runs the given action on every press,
    /// ignoring where exactly it landed.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self::at_pos(move |_pos| action())
    }

    /// Constructs a `Press` whose action also receives the pressed
    /// position.
    pub fn at_pos(action: impl Fn(Pos2D) + 'static) -> Self {
        Self {
            action: Rc::new(action),
        }
    }
}

impl ShapeTarget for Press {
    fn register_for(&self, source: &dyn MouseSource, overlap: Rc<dyn Area>) {
        source.register(Box::new(PressListener {
            action: Rc::clone(&self.action),
            overlap,
        }));
    }
}

struct PressListener {
    action: Rc<dyn Fn(Pos2D)>,
    overlap: Rc<dyn Area>,
}

impl MouseListener for PressListener {
    fn on_press(&self, pos: Pos2D) {
        if self.overlap.contains(pos) {
            trace!("press at ({}, {})", pos.get_x(), pos.get_y());
            (self.action)(pos);
        }
    }
}
