use std::rc::Rc;

use crate::{ColorSource, Liveness, MouseSource, Pos, Redrawable, Shape, Surface};

/// A 1 pixel wide line between two positions. Lines never react to the
/// mouse.
pub struct Line {
    from: Box<dyn Pos>,
    to: Box<dyn Pos>,
    color: Box<dyn ColorSource>,
}

impl Line {
    pub fn new(
        from: impl Pos + 'static,
        to: impl Pos + 'static,
        color: impl ColorSource + 'static,
    ) -> Self {
        Self {
            from: Box::new(from),
            to: Box::new(to),
            color: Box::new(color),
        }
    }
}

impl Shape for Line {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        surface.set_color(self.color.get_color());
        surface.draw_line(
            self.from.get_x(),
            self.from.get_y(),
            self.to.get_x(),
            self.to.get_y(),
        );
        Liveness::Alive
    }

    fn register_for(&self, _source: &dyn MouseSource) {}

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.from.register(redrawable);
        self.to.register(redrawable);
        self.color.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DrawCall, FakeMouse, FakeSurface, Pos2D};

    #[test]
    fn test_draw_connects_both_positions() {
        let mut line = Line::new(Pos2D::new(1, 2), Pos2D::new(30, 40), Color::rgb(5, 5, 5));
        let mut surface = FakeSurface::new();
        assert_eq!(Liveness::Alive, line.draw(&mut surface));
        assert_eq!(
            &[
                DrawCall::SetColor(Color::rgb(5, 5, 5)),
                DrawCall::DrawLine {
                    x1: 1,
                    y1: 2,
                    x2: 30,
                    y2: 40
                }
            ],
            surface.get_calls()
        );
    }

    #[test]
    fn test_lines_never_listen_to_the_mouse() {
        let line = Line::new(Pos2D::new(0, 0), Pos2D::new(10, 10), Color::black());
        let mouse = FakeMouse::new();
        line.register_for(&mouse);
        assert_eq!(0, mouse.get_listener_count());
    }
}
