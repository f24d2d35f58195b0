use std::rc::Rc;

use crate::{Pos, Pos2D, Redrawable, Size};

/// A cartesian two-dimensional rectangular area: a position plus a size.
///
/// This is the unit most shapes and overlap tests are built from. Like the
/// other geometry traits, implementations may derive their values, so every
/// accessor recomputes on each call.
pub trait Area {
    /// Gets the x coordinate of the top-left corner.
    fn get_x(&self) -> i32;

    /// Gets the y coordinate of the top-left corner.
    fn get_y(&self) -> i32;

    /// Gets the width of this area.
    fn get_width(&self) -> i32;

    /// Gets the height of this area.
    fn get_height(&self) -> i32;

    /// Checks whether the given point lies within this area.
    ///
    /// The test is inclusive of both boundary edges: a point on the left
    /// *or* the right border (and likewise top or bottom) is considered
    /// inside. As a consequence, two adjacent non-overlapping areas share
    /// their boundary pixels.
    fn contains(&self, pos: Pos2D) -> bool {
        let x = self.get_x();
        let y = self.get_y();
        x <= pos.get_x()
            && pos.get_x() <= x + self.get_width()
            && y <= pos.get_y()
            && pos.get_y() <= y + self.get_height()
    }

    /// Subscribes the given invalidation sink to changes of this area.
    fn register(&self, redrawable: &Rc<dyn Redrawable>);
}

impl<A: Area + ?Sized> Area for Box<A> {
    fn get_x(&self) -> i32 {
        (**self).get_x()
    }

    fn get_y(&self) -> i32 {
        (**self).get_y()
    }

    fn get_width(&self) -> i32 {
        (**self).get_width()
    }

    fn get_height(&self) -> i32 {
        (**self).get_height()
    }

    fn contains(&self, pos: Pos2D) -> bool {
        (**self).contains(pos)
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        (**self).register(redrawable)
    }
}

/// Basic concrete implementation of [`Area`], combining a [`Pos`] and a
/// [`Size`]. Whether it is immutable depends on the given position and
/// size; this struct never mutates state by itself.
pub struct Area2D {
    pos: Box<dyn Pos>,
    size: Box<dyn Size>,
}

impl Area2D {
    /// Constructs a new `Area2D` from the given position and size.
    pub fn new(pos: impl Pos + 'static, size: impl Size + 'static) -> Self {
        Self {
            pos: Box::new(pos),
            size: Box::new(size),
        }
    }

    /// Constructs a new `Area2D` at the origin with the given size.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(Pos2D::default(), crate::Size2D::new(width, height))
    }
}

impl Area for Area2D {
    fn get_x(&self) -> i32 {
        self.pos.get_x()
    }

    fn get_y(&self) -> i32 {
        self.pos.get_y()
    }

    fn get_width(&self) -> i32 {
        self.size.get_width()
    }

    fn get_height(&self) -> i32 {
        self.size.get_height()
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.pos.register(redrawable);
        self.size.register(redrawable);
    }
}
