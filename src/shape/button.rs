use std::rc::Rc;

use crate::{
    Area, DualColor, Liveness, MouseSource, PressRelease, Rect, Redrawable, Shape, Surface,
};

/// A rectangular button: it shows its pressed color while the mouse holds it
/// down and runs its action when the press is released inside it.
pub struct Button {
    body: Rect,
}

impl Button {
    /// Constructs a `Button` in the default gray colors.
    pub fn new(area: Rc<dyn Area>, action: impl Fn() + 'static) -> Self {
        Self::colored(area, DualColor::button(), action)
    }

    /// Constructs a `Button` with its own pair of colors. The first color is
    /// shown while released, the second while pressed.
    pub fn colored(area: Rc<dyn Area>, colors: DualColor, action: impl Fn() + 'static) -> Self {
        let on_press = colors.clone();
        let on_release = colors.clone();
        let target = PressRelease::new(
            move || on_press.swap(),
            move || {
                on_release.swap();
                action();
            },
        );
        Self {
            body: Rect::with_target(area, colors, target),
        }
    }
}

impl Shape for Button {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        self.body.draw(surface)
    }

    fn register_for(&self, source: &dyn MouseSource) {
        self.body.register_for(source);
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.body.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Area2D, Color, DrawCall, FakeMouse, FakeSurface, Pos2D, Size2D};
    use std::cell::Cell;

    fn button_area() -> Rc<dyn Area> {
        Rc::new(Area2D::new(Pos2D::new(10, 10), Size2D::new(50, 50)))
    }

    #[test]
    fn test_action_runs_on_release_inside() {
        let counter = Rc::new(Cell::new(0));
        let clone = Rc::clone(&counter);
        let button = Button::new(button_area(), move || clone.set(clone.get() + 1));
        let mouse = FakeMouse::new();
        button.register_for(&mouse);

        mouse.press(Pos2D::new(30, 30));
        assert_eq!(0, counter.get());
        mouse.release(Pos2D::new(30, 30));
        assert_eq!(1, counter.get());
    }

    #[test]
    fn test_the_color_swaps_while_held_down() {
        let mut button = Button::new(button_area(), || {});
        let mouse = FakeMouse::new();
        button.register_for(&mouse);

        let released_gray = Color::rgb(100, 100, 100);
        let pressed_gray = Color::rgb(200, 200, 200);

        let mut surface = FakeSurface::new();
        button.draw(&mut surface);
        assert_eq!(DrawCall::SetColor(released_gray), surface.get_calls()[0]);

        mouse.press(Pos2D::new(30, 30));
        let mut held = FakeSurface::new();
        button.draw(&mut held);
        assert_eq!(DrawCall::SetColor(pressed_gray), held.get_calls()[0]);

        mouse.release(Pos2D::new(30, 30));
        let mut after = FakeSurface::new();
        button.draw(&mut after);
        assert_eq!(DrawCall::SetColor(released_gray), after.get_calls()[0]);
    }

    #[test]
    fn test_a_release_elsewhere_keeps_the_button_pressed() {
        let button = Button::new(button_area(), || {});
        let mouse = FakeMouse::new();
        button.register_for(&mouse);

        mouse.press(Pos2D::new(30, 30));
        mouse.release(Pos2D::new(100, 100));

        // The release landed outside, so the button still shows its
        // pressed color until a release inside finishes the pair
        let mut button = button;
        let mut surface = FakeSurface::new();
        button.draw(&mut surface);
        assert_eq!(
            DrawCall::SetColor(Color::rgb(200, 200, 200)),
            surface.get_calls()[0]
        );
    }

    #[test]
    fn test_custom_colors() {
        let colors = DualColor::new(Color::rgb(0, 0, 255), Color::rgb(0, 255, 0));
        let mut button = Button::colored(button_area(), colors, || {});
        let mut surface = FakeSurface::new();
        button.draw(&mut surface);
        assert_eq!(
            DrawCall::SetColor(Color::rgb(0, 0, 255)),
            surface.get_calls()[0]
        );
    }
}
