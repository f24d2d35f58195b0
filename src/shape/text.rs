use std::cell::Cell;
use std::rc::Rc;

use crate::{Area, ColorSource, Liveness, MouseSource, Redrawable, Shape, Surface};

#[derive(Copy, Clone)]
struct ChosenFont {
    size: u32,
    ascent: i32,
    area_width: i32,
    area_height: i32,
}

/// Text drawn in the largest font size that still fits in its area.
///
/// Finding that size requires measuring the text at several candidate sizes,
/// so the result is cached. The cache notes the area dimensions it was
/// computed for and is thrown away when they change, which matters for text
/// on an animated size.
pub struct Text {
    text: String,
    area: Rc<dyn Area>,
    color: Box<dyn ColorSource>,
    font: Cell<Option<ChosenFont>>,
}

impl Text {
    pub fn new(text: &str, area: Rc<dyn Area>, color: impl ColorSource + 'static) -> Self {
        Self {
            text: text.to_string(),
            area,
            color: Box::new(color),
            font: Cell::new(None),
        }
    }

    fn fits(&self, surface: &dyn Surface, size: u32, width: i32, height: i32) -> bool {
        let metrics = surface.measure_text(&self.text, size);
        metrics.width <= width && metrics.ascent <= height
    }

    fn choose_font(&self, surface: &dyn Surface, width: i32, height: i32) -> ChosenFont {
        let mut size = 10;
        if self.fits(surface, size, width, height) {
            while self.fits(surface, size + 1, width, height) {
                size += 1;
            }
        } else {
            while size > 1 && !self.fits(surface, size, width, height) {
                size -= 1;
            }
        }
        ChosenFont {
            size,
            ascent: surface.measure_text(&self.text, size).ascent,
            area_width: width,
            area_height: height,
        }
    }

    fn current_font(&self, surface: &dyn Surface) -> ChosenFont {
        let width = self.area.get_width();
        let height = self.area.get_height();
        match self.font.get() {
            Some(font) if font.area_width == width && font.area_height == height => font,
            _ => {
                let font = self.choose_font(surface, width, height);
                self.font.set(Some(font));
                font
            }
        }
    }
}

impl Shape for Text {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        let font = self.current_font(surface);
        surface.set_color(self.color.get_color());
        surface.set_font_size(font.size);
        surface.draw_text(
            &self.text,
            self.area.get_x(),
            self.area.get_y() + font.ascent,
        );
        Liveness::Alive
    }

    fn register_for(&self, _source: &dyn MouseSource) {}

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.area.register(redrawable);
        self.color.register(redrawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Area2D, Color, DrawCall, FakeSurface, Pos2D, Size2D};

    // The fake surface reports width = length * size and ascent = size.

    #[test]
    fn test_picks_the_largest_fitting_font_size() {
        let mut text = Text::new(
            "abcd",
            Rc::new(Area2D::new(Pos2D::new(0, 0), Size2D::new(100, 20))),
            Color::black(),
        );
        let mut surface = FakeSurface::new();
        text.draw(&mut surface);
        // Size 20 fits (width 80, ascent 20) but size 21 has ascent 21
        assert!(surface.get_calls().contains(&DrawCall::SetFontSize(20)));
    }

    #[test]
    fn test_shrinks_below_the_starting_size_when_needed() {
        let mut text = Text::new(
            "abcd",
            Rc::new(Area2D::with_size(100, 5)),
            Color::black(),
        );
        let mut surface = FakeSurface::new();
        text.draw(&mut surface);
        assert!(surface.get_calls().contains(&DrawCall::SetFontSize(5)));
    }

    #[test]
    fn test_baseline_sits_one_ascent_below_the_top() {
        let mut text = Text::new(
            "abcd",
            Rc::new(Area2D::new(Pos2D::new(10, 40), Size2D::new(100, 20))),
            Color::black(),
        );
        let mut surface = FakeSurface::new();
        text.draw(&mut surface);
        assert!(surface.get_calls().contains(&DrawCall::DrawText {
            text: "abcd".to_string(),
            x: 10,
            y: 60
        }));
    }

    #[test]
    fn test_font_size_is_recomputed_when_the_area_changes() {
        use crate::{Expiration, FakeClock, Scaling};

        // The clock is read once by start() and then twice per draw, once
        // for the width and once for the height
        let size = Scaling::with_watch(
            Size2D::new(100, 20),
            Size2D::new(100, 10),
            Expiration::with_clock(FakeClock::new(vec![0, 0, 0, 10]), 10),
        );
        size.start();
        let area = Area2D::new(Pos2D::new(0, 0), size);
        let mut text = Text::new("abcd", Rc::new(area), Color::black());

        let mut before = FakeSurface::new();
        text.draw(&mut before);
        assert!(before.get_calls().contains(&DrawCall::SetFontSize(20)));

        let mut after = FakeSurface::new();
        text.draw(&mut after);
        assert!(after.get_calls().contains(&DrawCall::SetFontSize(10)));
    }
}
