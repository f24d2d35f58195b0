use std::cell::RefCell;
use std::rc::Rc;

use crate::{Elapsable, Expiration, Redrawable, Size};

/// An animated size that interpolates from an origin size to an ending size
/// over some duration.
///
/// Before [`start`](Scaling::start) has been called the scaling reports the
/// origin size. After the duration has fully elapsed it reports the ending
/// size and stays there. In between, each axis is interpolated linearly and
/// rounded to the nearest integer. The interpolation is sampled on every
/// read, so a window that repaints periodically will observe the animation
/// without further bookkeeping.
pub struct Scaling {
    origin: Box<dyn Size>,
    ending: Box<dyn Size>,
    watch: Box<dyn Elapsable>,
    redrawable: RefCell<Option<Rc<dyn Redrawable>>>,
}

impl Scaling {
    /// Constructs a new `Scaling` that needs `millis` milliseconds to get
    /// from `origin` to `ending` once started.
    pub fn new(origin: impl Size + 'static, ending: impl Size + 'static, millis: u64) -> Self {
        Self::with_watch(origin, ending, Expiration::new(millis))
    }

    /// Constructs a new `Scaling` that takes its progress from the given
    /// watch instead of real time.
    pub fn with_watch(
        origin: impl Size + 'static,
        ending: impl Size + 'static,
        watch: impl Elapsable + 'static,
    ) -> Self {
        Self {
            origin: Box::new(origin),
            ending: Box::new(ending),
            watch: Box::new(watch),
            redrawable: RefCell::new(None),
        }
    }

    /// Starts the animation and requests a redraw so that the first
    /// interpolated value becomes visible.
    pub fn start(&self) {
        self.watch.start();
        if let Some(redrawable) = &*self.redrawable.borrow() {
            redrawable.request_redraw();
        }
    }

    fn interpolate(&self, origin: i32, ending: i32) -> i32 {
        let fraction = self.watch.elapsed_percent();
        origin + ((ending - origin) as f64 * fraction).round() as i32
    }
}

impl Size for Scaling {
    fn get_width(&self) -> i32 {
        self.interpolate(self.origin.get_width(), self.ending.get_width())
    }

    fn get_height(&self) -> i32 {
        self.interpolate(self.origin.get_height(), self.ending.get_height())
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.origin.register(redrawable);
        self.ending.register(redrawable);
        *self.redrawable.borrow_mut() = Some(Rc::clone(redrawable));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CountingRedrawable, Expiration, FakeClock, Size2D};

    #[test]
    fn test_no_start_same_value() {
        let scaling = Scaling::new(Size2D::new(123, 4324), Size2D::new(428, 2348), 43);
        assert_eq!(123, scaling.get_width());
        assert_eq!(4324, scaling.get_height());
    }

    #[test]
    fn test_scales_halfway() {
        let scaling = Scaling::with_watch(
            Size2D::new(500, 1000),
            Size2D::new(50, 100),
            Expiration::with_clock(FakeClock::new(vec![0, 5]), 10),
        );
        scaling.start();
        assert_eq!(500 + (50 - 500) / 2, scaling.get_width());
        assert_eq!(1000 + (100 - 1000) / 2, scaling.get_height());
    }

    #[test]
    fn test_reaches_end_and_stays() {
        let scaling = Scaling::with_watch(
            Size2D::new(534, 321),
            Size2D::new(342, 346),
            Expiration::with_clock(FakeClock::new(vec![0, 5]), 5),
        );
        scaling.start();
        assert_eq!(342, scaling.get_width());
        assert_eq!(346, scaling.get_height());
        // The fake clock sticks on its last value, so the size stays put
        assert_eq!(342, scaling.get_width());
        assert_eq!(346, scaling.get_height());
    }

    #[test]
    fn test_start_requests_redraw() {
        let scaling = Scaling::new(Size2D::new(0, 0), Size2D::new(10, 10), 100);
        let counter = Rc::new(CountingRedrawable::new());
        let redrawable: Rc<dyn Redrawable> = Rc::clone(&counter) as Rc<dyn Redrawable>;
        scaling.register(&redrawable);
        scaling.start();
        assert_eq!(1, counter.get_count());
    }

    #[test]
    fn test_register_reaches_nested_scaling() {
        // A scaling buried inside a derived size still receives the sink
        let counter = Rc::new(CountingRedrawable::new());
        let redrawable: Rc<dyn Redrawable> = Rc::clone(&counter) as Rc<dyn Redrawable>;

        let scaling = Rc::new(Scaling::new(Size2D::new(0, 0), Size2D::new(8, 8), 100));
        struct Shared(Rc<Scaling>);
        impl Size for Shared {
            fn get_width(&self) -> i32 {
                self.0.get_width()
            }
            fn get_height(&self) -> i32 {
                self.0.get_height()
            }
            fn register(&self, redrawable: &Rc<dyn Redrawable>) {
                self.0.register(redrawable);
            }
        }

        let derived = crate::Sum::new(Shared(Rc::clone(&scaling)), Size2D::new(1, 1));
        derived.register(&redrawable);
        scaling.start();
        assert_eq!(1, counter.get_count());
    }
}
