use std::rc::Rc;

use log::trace;

use crate::{Area, MouseListener, MouseSource, Pos, Pos2D, ShapeTarget};

/// A [`ShapeTarget`] that runs an action every time a mouse button is
/// released inside the shape it is installed on.
pub struct Release {
    action: Rc<dyn Fn()>,
}

impl Release {
    /// Constructs a `Release` that runs the given action on every release
    /// inside the shape.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            action: Rc::new(action),
        }
    }
}

impl ShapeTarget for Release {
    fn register_for(&self, source: &dyn MouseSource, overlap: Rc<dyn Area>) {
        source.register(Box::new(ReleaseListener {
            action: Rc::clone(&self.action),
            overlap,
        }));
    }
}

struct ReleaseListener {
    action: Rc<dyn Fn()>,
    overlap: Rc<dyn Area>,
}

impl MouseListener for ReleaseListener {
    fn on_release(&self, pos: Pos2D) {
        if self.overlap.contains(pos) {
            trace!("release at ({}, {})", pos.get_x(), pos.get_y());
            (self.action)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Area2D, FakeMouse, Size2D};
    use std::cell::Cell;

    #[test]
    fn test_release_fires_only_inside() {
        let counter = Rc::new(Cell::new(0));
        let clone = Rc::clone(&counter);
        let release = Release::new(move || clone.set(clone.get() + 1));

        let mouse = FakeMouse::new();
        let area: Rc<dyn Area> = Rc::new(Area2D::new(Pos2D::new(10, 10), Size2D::new(30, 30)));
        release.register_for(&mouse, area);

        mouse.release(Pos2D::new(15, 15));
        mouse.release(Pos2D::new(50, 50));
        assert_eq!(1, counter.get());
    }
}
