use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::Redrawable;

/// Represents a simple 32-bit RGBA color. Red, green, blue and alpha are
/// stored with 8 bits each, where 0 means nothing of that component and 255
/// means the maximum amount of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Constructs a fully opaque color with the given red, green and blue
    /// components.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Constructs a color with the given red, green, blue and alpha
    /// components.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Gets the opaque black color.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn get_red(&self) -> u8 {
        self.red
    }

    pub fn get_green(&self) -> u8 {
        self.green
    }

    pub fn get_blue(&self) -> u8 {
        self.blue
    }

    pub fn get_alpha(&self) -> u8 {
        self.alpha
    }
}

/// Something that can tell which color a shape should currently be drawn
/// with. Plain colors implement this by returning themselves, but sources
/// may also switch between colors over time.
pub trait ColorSource {
    /// Gets the color a shape consulting this source should be drawn with
    /// right now.
    fn get_color(&self) -> Color;

    /// Subscribes the given invalidation sink to color changes. Sources
    /// whose color never changes don't need to remember it.
    fn register(&self, _redrawable: &Rc<dyn Redrawable>) {}
}

impl ColorSource for Color {
    fn get_color(&self) -> Color {
        *self
    }
}

struct DualColorState {
    first: Color,
    second: Color,
    swapped: Cell<bool>,
    redrawable: RefCell<Option<Rc<dyn Redrawable>>>,
}

/// A [`ColorSource`] that switches between two colors every time
/// [`swap`](DualColor::swap) is called. Cloning a `DualColor` yields a
/// second handle to the same state, so one clone can be installed in a
/// shape while another is swapped from an event action.
#[derive(Clone)]
pub struct DualColor {
    state: Rc<DualColorState>,
}

impl DualColor {
    /// Constructs a `DualColor` that starts out reporting `first`.
    pub fn new(first: Color, second: Color) -> Self {
        Self {
            state: Rc::new(DualColorState {
                first,
                second,
                swapped: Cell::new(false),
                redrawable: RefCell::new(None),
            }),
        }
    }

    /// Constructs the `DualColor` of a default button: gray while released
    /// and a lighter gray while pressed.
    pub fn button() -> Self {
        Self::new(Color::rgb(100, 100, 100), Color::rgb(200, 200, 200))
    }

    /// Switches to the other color and notifies the registered invalidation
    /// sink, if any.
    pub fn swap(&self) {
        self.state.swapped.set(!self.state.swapped.get());
        if let Some(redrawable) = self.state.redrawable.borrow().as_ref() {
            redrawable.request_redraw();
        }
    }
}

impl ColorSource for DualColor {
    fn get_color(&self) -> Color {
        if self.state.swapped.get() {
            self.state.second
        } else {
            self.state.first
        }
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        *self.state.redrawable.borrow_mut() = Some(Rc::clone(redrawable));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CountingRedrawable;

    #[test]
    fn test_color_components() {
        let color = Color::rgba(12, 34, 56, 78);
        assert_eq!(12, color.get_red());
        assert_eq!(34, color.get_green());
        assert_eq!(56, color.get_blue());
        assert_eq!(78, color.get_alpha());
        assert_eq!(255, Color::rgb(1, 2, 3).get_alpha());
        assert_eq!(Color::rgb(0, 0, 0), Color::black());
    }

    #[test]
    fn test_plain_color_is_its_own_source() {
        let color = Color::rgb(10, 20, 30);
        assert_eq!(color, color.get_color());
    }

    #[test]
    fn test_dual_color_alternates_on_swap() {
        let first = Color::rgb(1, 1, 1);
        let second = Color::rgb(2, 2, 2);
        let dual = DualColor::new(first, second);
        assert_eq!(first, dual.get_color());
        dual.swap();
        assert_eq!(second, dual.get_color());
        dual.swap();
        assert_eq!(first, dual.get_color());
    }

    #[test]
    fn test_clones_share_the_swap_state() {
        let dual = DualColor::new(Color::rgb(1, 1, 1), Color::rgb(2, 2, 2));
        let other = dual.clone();
        dual.swap();
        assert_eq!(Color::rgb(2, 2, 2), other.get_color());
    }

    #[test]
    fn test_swap_notifies_exactly_once() {
        let dual = DualColor::new(Color::black(), Color::rgb(9, 9, 9));
        let counter = Rc::new(CountingRedrawable::new());
        let redrawable: Rc<dyn Redrawable> = Rc::clone(&counter) as Rc<dyn Redrawable>;
        dual.register(&redrawable);
        assert_eq!(0, counter.get_count());
        dual.swap();
        assert_eq!(1, counter.get_count());
        dual.swap();
        assert_eq!(2, counter.get_count());
    }
}
