use crate::Color;

/// The measured dimensions of a piece of text at some font size, as reported
/// by [`Surface::measure_text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextMetrics {
    /// The width the text would occupy, in pixels.
    pub width: i32,
    /// The distance from the baseline to the top of the tallest glyph, in
    /// pixels.
    pub ascent: i32,
}

/// The drawing operations shapes paint themselves with.
///
/// A `Surface` is handed to [`Shape::draw`](crate::Shape::draw) every
/// repaint. Rendering backends implement it over whatever they draw to, and
/// tests use a recording implementation so that drawing behavior can be
/// verified without opening any window.
pub trait Surface {
    /// Sets the color all subsequent fill and draw operations use, until the
    /// next call to this method.
    fn set_color(&mut self, color: Color);

    /// Fills the rectangle with top-left corner (x, y) and the given width
    /// and height.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Fills the largest oval that fits in the rectangle with top-left
    /// corner (x, y) and the given width and height.
    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Draws a 1 pixel wide line from (x1, y1) to (x2, y2).
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Fills the polygon whose corners are (xs[0], ys[0]) up to and
    /// including (xs[n - 1], ys[n - 1]). Both slices must have the same
    /// length.
    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]);

    /// Sets the font size all subsequent [`draw_text`](Surface::draw_text)
    /// calls use.
    fn set_font_size(&mut self, size: u32);

    /// Measures the given text at the given font size without drawing it.
    fn measure_text(&self, text: &str, size: u32) -> TextMetrics;

    /// Draws the given text with its baseline starting at (x, y), using the
    /// current color and font size.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
}
