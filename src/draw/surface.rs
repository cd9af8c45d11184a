//! Traits describing the host rendering surface.
//!
//! Layout code only needs a [`TextMeasurer`]; the drawing entry points need a
//! full [`Surface`]. Coordinates are already resolved when they reach these
//! traits: no rotation, scaling or alignment happens below this line.

use super::color::Color;
use super::point::Point;

/// Width oracle consumed by the line-wrapping code.
///
/// Both values must stay constant for the duration of one layout call.
pub trait TextMeasurer {
    /// Rendered width of a single line of `text` at the current font size.
    fn measure_text_width(&self, text: &str) -> f64;

    /// Vertical distance between consecutive lines.
    fn line_height(&self) -> f64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text_width(&self, text: &str) -> f64 {
        (**self).measure_text_width(text)
    }

    fn line_height(&self) -> f64 {
        (**self).line_height()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &mut T {
    fn measure_text_width(&self, text: &str) -> f64 {
        (**self).measure_text_width(text)
    }

    fn line_height(&self) -> f64 {
        (**self).line_height()
    }
}

/// Primitive draw calls provided by a rendering backend.
pub trait Surface: TextMeasurer {
    /// Drawable area as `(width, height)`.
    fn dimensions(&self) -> (f64, f64);

    /// Changes the font size; the line height follows it.
    fn set_font_size(&mut self, size: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: f64);

    /// Closed polygon through `points`, stroked and/or filled.
    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>);

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);

    /// Draws one line of text whose line box starts at `y`.
    ///
    /// The baseline sits at `y + line_height()`.
    fn draw_text_top(&mut self, x: f64, y: f64, text: &str, color: Color);
}
