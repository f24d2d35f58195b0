use std::rc::Rc;

use crate::{Liveness, MouseSource, Redrawable, Shape, Surface, Text};

/// A shape with a text label drawn on top of it. The label is expected to
/// share the body's area, so both cover the same region.
///
/// Only the body handles mouse input. The label sits on top of it, so
/// letting both react would fire every handler twice for the same event.
pub struct Labeled {
    body: Box<dyn Shape>,
    label: Text,
}

impl Labeled {
    pub fn new(body: impl Shape + 'static, label: Text) -> Self {
        Self {
            body: Box::new(body),
            label,
        }
    }
}

impl Shape for Labeled {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        let liveness = self.body.draw(surface);
        self.label.draw(surface);
        liveness
    }

    fn register_for(&self, source: &dyn MouseSource) {
        self.body.register_for(source);
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.body.register(redrawable);
        self.label.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Area, Area2D, Button, Color, DrawCall, FakeMouse, FakeSurface, Pos2D, Size2D,
    };
    use std::cell::Cell;

    #[test]
    fn test_draws_the_body_first_and_the_label_on_top() {
        let area: Rc<dyn Area> = Rc::new(Area2D::new(Pos2D::new(0, 0), Size2D::new(100, 20)));
        let body = crate::Rect::new(Rc::clone(&area), Color::rgb(1, 1, 1));
        let label = Text::new("hi", Rc::clone(&area), Color::rgb(2, 2, 2));
        let mut labeled = Labeled::new(body, label);

        let mut surface = FakeSurface::new();
        labeled.draw(&mut surface);

        let calls = surface.get_calls();
        let rect_at = calls
            .iter()
            .position(|call| matches!(call, DrawCall::FillRect { .. }))
            .unwrap();
        let text_at = calls
            .iter()
            .position(|call| matches!(call, DrawCall::DrawText { .. }))
            .unwrap();
        assert!(rect_at < text_at);
    }

    #[test]
    fn test_only_the_body_handles_the_mouse() {
        let area: Rc<dyn Area> = Rc::new(Area2D::new(Pos2D::new(10, 10), Size2D::new(50, 50)));
        let counter = Rc::new(Cell::new(0));
        let clone = Rc::clone(&counter);
        let body = Button::new(Rc::clone(&area), move || clone.set(clone.get() + 1));
        let label = Text::new("go", Rc::clone(&area), Color::black());
        let labeled = Labeled::new(body, label);

        let mouse = FakeMouse::new();
        labeled.register_for(&mouse);
        assert_eq!(1, mouse.get_listener_count());

        mouse.press(Pos2D::new(30, 30));
        mouse.release(Pos2D::new(30, 30));
        assert_eq!(1, counter.get());
    }
}
