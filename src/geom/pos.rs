use std::rc::Rc;

use crate::Redrawable;

/// A cartesian two-dimensional position.
///
/// This is a trait rather than a plain struct because some implementations
/// derive their coordinates instead of storing them (a moving position, for
/// instance). Derived implementations recompute on every read, so callers
/// must not assume two consecutive reads return the same values.
pub trait Pos {
    /// Gets the x coordinate of this position.
    fn get_x(&self) -> i32;

    /// Gets the y coordinate of this position.
    fn get_y(&self) -> i32;

    /// Subscribes the given invalidation sink to changes of this position.
    ///
    /// Plain values never change after construction, so the default
    /// implementation does nothing. Derived implementations must forward
    /// this call to every operand they read from.
    fn register(&self, _redrawable: &Rc<dyn Redrawable>) {}
}

/// Basic concrete implementation of [`Pos`]: a fixed (x, y) pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Pos2D {
    x: i32,
    y: i32,
}

impl Pos2D {
    /// Constructs a new `Pos2D` with the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Pos for Pos2D {
    fn get_x(&self) -> i32 {
        self.x
    }

    fn get_y(&self) -> i32 {
        self.y
    }
}
