use crate::{Color, Surface, TextMetrics};

use super::font;

/// A software rasterizer over a plain `0x00RRGGBB` pixel buffer, as handed
/// out by softbuffer. Text is drawn with the built-in bitmap font.
pub struct SoftSurface<'a> {
    buffer: &'a mut [u32],
    width: i32,
    height: i32,
    color: Color,
    font_size: u32,
}

impl<'a> SoftSurface<'a> {
    pub fn new(buffer: &'a mut [u32], width: i32, height: i32) -> Self {
        Self {
            buffer,
            width,
            height,
            color: Color::black(),
            font_size: 10,
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let index = (y * self.width + x) as usize;
        let alpha = self.color.get_alpha() as u32;
        if alpha == 0 {
            return;
        }
        let old = self.buffer[index];
        let blend = |src: u8, dst: u32| -> u32 {
            (src as u32 * alpha + dst * (255 - alpha)) / 255
        };
        let red = blend(self.color.get_red(), (old >> 16) & 0xFF);
        let green = blend(self.color.get_green(), (old >> 8) & 0xFF);
        let blue = blend(self.color.get_blue(), old & 0xFF);
        self.buffer[index] = (red << 16) | (green << 8) | blue;
    }

    fn font_scale(&self) -> i32 {
        ((self.font_size as i32) / font::GLYPH_HEIGHT).max(1)
    }

    fn metrics(&self, text: &str, size: u32) -> TextMetrics {
        let scale = ((size as i32) / font::GLYPH_HEIGHT).max(1);
        TextMetrics {
            width: text.chars().count() as i32 * font::ADVANCE * scale,
            ascent: font::GLYPH_HEIGHT * scale,
        }
    }
}

impl Surface for SoftSurface<'_> {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + width).min(self.width);
        let bottom = (y + height).min(self.height);
        for row in top..bottom {
            for column in left..right {
                self.put_pixel(column, row);
            }
        }
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let center_x = x as f64 + width as f64 / 2.0;
        let center_y = y as f64 + height as f64 / 2.0;
        let radius_x = width as f64 / 2.0;
        let radius_y = height as f64 / 2.0;
        for row in y.max(0)..(y + height).min(self.height) {
            for column in x.max(0)..(x + width).min(self.width) {
                let dx = (column as f64 + 0.5 - center_x) / radius_x;
                let dy = (row as f64 + 0.5 - center_y) / radius_y;
                if dx * dx + dy * dy <= 1.0 {
                    self.put_pixel(column, row);
                }
            }
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        // Bresenham
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let step_x = if x1 < x2 { 1 } else { -1 };
        let step_y = if y1 < y2 { 1 } else { -1 };
        let mut error = dx + dy;
        let mut x = x1;
        let mut y = y1;
        loop {
            self.put_pixel(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        let corners = xs.len().min(ys.len());
        if corners < 3 {
            return;
        }
        let top = ys[..corners].iter().min().copied().unwrap_or(0).max(0);
        let bottom = ys[..corners]
            .iter()
            .max()
            .copied()
            .unwrap_or(0)
            .min(self.height - 1);
        // Even-odd scanline fill
        for row in top..=bottom {
            let scan = row as f64 + 0.5;
            let mut crossings = Vec::new();
            for index in 0..corners {
                let next = (index + 1) % corners;
                let (x1, y1) = (xs[index] as f64, ys[index] as f64);
                let (x2, y2) = (xs[next] as f64, ys[next] as f64);
                if (y1 <= scan && scan < y2) || (y2 <= scan && scan < y1) {
                    crossings.push(x1 + (scan - y1) / (y2 - y1) * (x2 - x1));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let left = pair[0].ceil() as i32;
                let right = pair[1].floor() as i32;
                for column in left..=right {
                    self.put_pixel(column, row);
                }
            }
        }
    }

    fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }

    fn measure_text(&self, text: &str, size: u32) -> TextMetrics {
        self.metrics(text, size)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let scale = self.font_scale();
        // The given y is the baseline, the glyphs start one ascent higher
        let top = y - font::GLYPH_HEIGHT * scale;
        let mut pen = x;
        for character in text.chars() {
            let rows = font::glyph(character);
            for (row_index, row) in rows.iter().enumerate() {
                for column in 0..font::GLYPH_WIDTH {
                    if row & (1 << (font::GLYPH_WIDTH - 1 - column)) != 0 {
                        for sub_y in 0..scale {
                            for sub_x in 0..scale {
                                self.put_pixel(
                                    pen + column * scale + sub_x,
                                    top + row_index as i32 * scale + sub_y,
                                );
                            }
                        }
                    }
                }
            }
            pen += font::ADVANCE * scale;
        }
    }
}
