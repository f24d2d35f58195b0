use std::rc::Rc;

use crate::{ColorSource, Liveness, MouseSource, Pos, Pos2D, Redrawable, Shape, Surface};

/// A filled polygon with a fixed outline. The corner positions are copied
/// at construction, so only the color can still change afterwards.
/// Polygons never react to the mouse.
pub struct Polygon {
    xs: Vec<i32>,
    ys: Vec<i32>,
    color: Box<dyn ColorSource>,
}

impl Polygon {
    pub fn new(corners: &[Pos2D], color: impl ColorSource + 'static) -> Self {
        Self {
            xs: corners.iter().map(|corner| corner.get_x()).collect(),
            ys: corners.iter().map(|corner| corner.get_y()).collect(),
            color: Box::new(color),
        }
    }
}

impl Shape for Polygon {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        surface.set_color(self.color.get_color());
        surface.fill_polygon(&self.xs, &self.ys);
        Liveness::Alive
    }

    fn register_for(&self, _source: &dyn MouseSource) {}

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.color.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DrawCall, FakeMouse, FakeSurface};

    #[test]
    fn test_draw_fills_the_snapshotted_outline() {
        let corners = [Pos2D::new(0, 0), Pos2D::new(10, 0), Pos2D::new(5, 8)];
        let mut polygon = Polygon::new(&corners, Color::rgb(2, 4, 6));
        let mut surface = FakeSurface::new();
        assert_eq!(Liveness::Alive, polygon.draw(&mut surface));
        assert_eq!(
            &[
                DrawCall::SetColor(Color::rgb(2, 4, 6)),
                DrawCall::FillPolygon {
                    xs: vec![0, 10, 5],
                    ys: vec![0, 0, 8]
                }
            ],
            surface.get_calls()
        );
    }

    #[test]
    fn test_polygons_never_listen_to_the_mouse() {
        let polygon = Polygon::new(&[Pos2D::new(0, 0)], Color::black());
        let mouse = FakeMouse::new();
        polygon.register_for(&mouse);
        assert_eq!(0, mouse.get_listener_count());
    }
}
