use std::rc::Rc;

use crate::{Redrawable, Size};

/// A size that is calculated from two other sizes by applying the given
/// operation per axis: width from the widths, height from the heights. The
/// operand order is preserved when the operation is applied.
///
/// The operands are read again on every access, so changes in a nested
/// composition are always visible.
pub struct SizeCalculation {
    first: Box<dyn Size>,
    second: Box<dyn Size>,
    operation: fn(i32, i32) -> i32,
}

impl SizeCalculation {
    /// Constructs a new `SizeCalculation` from the two operands and the
    /// operation to apply on their widths and heights.
    pub fn new(
        first: impl Size + 'static,
        second: impl Size + 'static,
        operation: fn(i32, i32) -> i32,
    ) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
            operation,
        }
    }
}

impl Size for SizeCalculation {
    fn get_width(&self) -> i32 {
        (self.operation)(self.first.get_width(), self.second.get_width())
    }

    fn get_height(&self) -> i32 {
        (self.operation)(self.first.get_height(), self.second.get_height())
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.first.register(redrawable);
        self.second.register(redrawable);
    }
}

/// The difference between two sizes:
/// `(first.width - second.width, first.height - second.height)`.
pub struct Diff {
    calculation: SizeCalculation,
}

impl Diff {
    /// Constructs the difference of `first` and `second`, in that order.
    pub fn new(first: impl Size + 'static, second: impl Size + 'static) -> Self {
        Self {
            calculation: SizeCalculation::new(first, second, |a, b| a - b),
        }
    }
}

impl Size for Diff {
    fn get_width(&self) -> i32 {
        self.calculation.get_width()
    }

    fn get_height(&self) -> i32 {
        self.calculation.get_height()
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.calculation.register(redrawable);
    }
}

/// The sum of two sizes:
/// `(first.width + second.width, first.height + second.height)`.
pub struct Sum {
    calculation: SizeCalculation,
}

impl Sum {
    /// Constructs the sum of `first` and `second`.
    pub fn new(first: impl Size + 'static, second: impl Size + 'static) -> Self {
        Self {
            calculation: SizeCalculation::new(first, second, |a, b| a + b),
        }
    }
}

impl Size for Sum {
    fn get_width(&self) -> i32 {
        self.calculation.get_width()
    }

    fn get_height(&self) -> i32 {
        self.calculation.get_height()
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.calculation.register(redrawable);
    }
}

/// A size adjusted by a function per axis. The wrapped size is read again on
/// every access and the adjustments are applied to the fresh values.
pub struct Adjusted {
    size: Box<dyn Size>,
    width: Box<dyn Fn(i32) -> i32>,
    height: Box<dyn Fn(i32) -> i32>,
}

impl Adjusted {
    /// Constructs a new `Adjusted` size that maps the width of `size`
    /// through `width` and its height through `height`.
    pub fn new(
        size: impl Size + 'static,
        width: impl Fn(i32) -> i32 + 'static,
        height: impl Fn(i32) -> i32 + 'static,
    ) -> Self {
        Self {
            size: Box::new(size),
            width: Box::new(width),
            height: Box::new(height),
        }
    }
}

impl Size for Adjusted {
    fn get_width(&self) -> i32 {
        (self.width)(self.size.get_width())
    }

    fn get_height(&self) -> i32 {
        (self.height)(self.size.get_height())
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.size.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size2D;

    #[test]
    fn test_diff() {
        let diff = Diff::new(Size2D::new(120, 70), Size2D::new(20, 30));
        assert_eq!(100, diff.get_width());
        assert_eq!(40, diff.get_height());
    }

    #[test]
    fn test_diff_can_be_negative() {
        let diff = Diff::new(Size2D::new(10, 10), Size2D::new(25, 5));
        assert_eq!(-15, diff.get_width());
        assert_eq!(5, diff.get_height());
    }

    #[test]
    fn test_sum() {
        let sum = Sum::new(Size2D::new(120, 70), Size2D::new(20, 30));
        assert_eq!(140, sum.get_width());
        assert_eq!(100, sum.get_height());
    }

    #[test]
    fn test_adjusted() {
        let adjusted = Adjusted::new(Size2D::new(50, 80), |w| w * 2, |h| h - 10);
        assert_eq!(100, adjusted.get_width());
        assert_eq!(70, adjusted.get_height());
    }

    #[test]
    fn test_composition_recomputes_on_every_read() {
        let sum = Sum::new(
            Diff::new(Size2D::new(100, 100), Size2D::new(40, 60)),
            Size2D::new(1, 2),
        );
        // Two reads of a pure composition must agree
        assert_eq!(61, sum.get_width());
        assert_eq!(61, sum.get_width());
        assert_eq!(42, sum.get_height());
    }
}
