use std::rc::Rc;

use log::trace;

use crate::{Area, MouseListener, MouseSource, Pos, Pos2D, ShapeTarget};

/// A [`ShapeTarget`] that runs an action every time the mouse clicks inside
/// the shape it is installed on.
pub struct Click {
    action: Rc<dyn Fn(Pos2D)>,
}

impl Click {
    /// Constructs a `Click` that runs the given action on every click,
    /// ignoring where exactly the click landed.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self::at_pos(move |_pos| action())
    }

    /// Constructs a `Click` whose action also receives the clicked
    /// position.
    pub fn at_pos(action: impl Fn(Pos2D) + 'static) -> Self {
        Self {
            action: Rc::new(action),
        }
    }
}

impl ShapeTarget for Click {
    fn register_for(&self, source: &dyn MouseSource, overlap: Rc<dyn Area>) {
        source.register(Box::new(ClickListener {
            action: Rc::clone(&self.action),
            overlap,
        }));
    }
}

struct ClickListener {
    action: Rc<dyn Fn(Pos2D)>,
    overlap: Rc<dyn Area>,
}

impl MouseListener for ClickListener {
    fn on_click(&self, pos: Pos2D) {
        if self.overlap.contains(pos) {
            trace!("click at ({}, {})", pos.get_x(), pos.get_y());
            (self.action)(pos);
        }
    }
}
