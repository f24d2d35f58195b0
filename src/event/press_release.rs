use std::cell::Cell;
use std::rc::Rc;

use crate::{Area, MouseListener, MouseSource, Pos2D, ShapeTarget};

/// A [`ShapeTarget`] that pairs a press action with a release action: the
/// release action runs only for releases that follow a press inside the
/// shape.
///
/// Note that a press inside the shape arms the release action until a
/// release lands inside the shape, no matter how much later that happens.
/// A release outside the shape does not disarm it.
pub struct PressRelease {
    press: Rc<dyn Fn()>,
    release: Rc<dyn Fn()>,
}

impl PressRelease {
    /// Constructs a `PressRelease` from the given press and release
    /// actions.
    pub fn new(press: impl Fn() + 'static, release: impl Fn() + 'static) -> Self {
        Self {
            press: Rc::new(press),
            release: Rc::new(release),
        }
    }
}

impl ShapeTarget for PressRelease {
    fn register_for(&self, source: &dyn MouseSource, overlap: Rc<dyn Area>) {
        source.register(Box::new(PressReleaseListener {
            press: Rc::clone(&self.press),
            release: Rc::clone(&self.release),
            pressed: Cell::new(false),
            overlap,
        }));
    }
}

struct PressReleaseListener {
    press: Rc<dyn Fn()>,
    release: Rc<dyn Fn()>,
    pressed: Cell<bool>,
    overlap: Rc<dyn Area>,
}

impl MouseListener for PressReleaseListener {
    fn on_press(&self, pos: Pos2D) {
        if self.overlap.contains(pos) {
            (self.press)();
            self.pressed.set(true);
        }
    }

    fn on_release(&self, pos: Pos2D) {
        if self.overlap.contains(pos) && self.pressed.get() {
            (self.release)();
            self.pressed.set(false);
        }
    }
}
