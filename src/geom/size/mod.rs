use std::rc::Rc;

use crate::Redrawable;

mod calculation;
mod scaling;

pub use calculation::*;
pub use scaling::*;

/// A two-dimensional size.
///
/// Like [`Pos`](crate::Pos), this is a trait so that derived sizes (the
/// difference or sum of two sizes, an animated size...) can stand in for a
/// plain value. Derived sizes compose other `Size` instances rather than
/// storing raw numbers and recompute on every read.
pub trait Size {
    /// Gets the width of this size.
    fn get_width(&self) -> i32;

    /// Gets the height of this size.
    fn get_height(&self) -> i32;

    /// Subscribes the given invalidation sink to changes of this size.
    ///
    /// Plain values never change after construction, so the default
    /// implementation does nothing. Derived sizes must forward this call to
    /// every operand, so that a notification originating deep inside a
    /// composition still reaches the subscriber.
    fn register(&self, _redrawable: &Rc<dyn Redrawable>) {}
}

/// Basic concrete implementation of [`Size`]: a fixed (width, height) pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Size2D {
    width: i32,
    height: i32,
}

impl Size2D {
    /// Constructs a new `Size2D` with the given `width` and `height`.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Size for Size2D {
    fn get_width(&self) -> i32 {
        self.width
    }

    fn get_height(&self) -> i32 {
        self.height
    }
}
