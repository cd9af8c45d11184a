//! Immediate-mode drawing façade over a [`Surface`].

use super::color::Color;
use super::point::Point;
use super::surface::{Surface, TextMeasurer};
use crate::config::TextConfig;
use crate::layout::{self, Justify, ParagraphStyle, TextSize};

/// Convenience drawing API combining primitives, geometry and text layout.
///
/// Owns the surface and the text configuration used for shadow offsets and
/// the initial font size.
pub struct Graphics<S: Surface> {
    surface: S,
    text: TextConfig,
}

impl<S: Surface> Graphics<S> {
    /// Wraps `surface`, applying the configured font size.
    pub fn new(mut surface: S, text: TextConfig) -> Self {
        surface.set_font_size(text.font_size);
        Self { surface, text }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn text_config(&self) -> &TextConfig {
        &self.text
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.text.font_size = size;
        self.surface.set_font_size(size);
    }

    pub fn font_size(&self) -> f64 {
        self.text.font_size
    }

    pub fn line_height(&self) -> f64 {
        self.surface.line_height()
    }

    /// Fills the whole surface with `color`.
    pub fn clear(&mut self, color: Color) {
        let (w, h) = self.surface.dimensions();
        self.surface.fill_rect(0.0, 0.0, w, h, color);
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.surface.fill_rect(x, y, w, h, color);
    }

    pub fn draw_centered_rect(&mut self, cx: f64, cy: f64, w: f64, h: f64, color: Color) {
        self.draw_rect(cx - w / 2.0, cy - h / 2.0, w, h, color);
    }

    /// Draws a rectangular frame from four bars, `xb` wide on the left and
    /// right and `yb` tall on the top and bottom.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_outline(&mut self, x: f64, y: f64, w: f64, h: f64, xb: f64, yb: f64, color: Color) {
        self.draw_rect(x, y, w - xb, yb, color);
        self.draw_rect(x + w - xb, y, xb, h - yb, color);
        self.draw_rect(x + xb, y + h - yb, w - xb, yb, color);
        self.draw_rect(x, y + yb, xb, h - yb, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_centered_outline(
        &mut self,
        cx: f64,
        cy: f64,
        w: f64,
        h: f64,
        xb: f64,
        yb: f64,
        color: Color,
    ) {
        self.draw_outline(cx - w / 2.0, cy - h / 2.0, w, h, xb, yb, color);
    }

    /// Filled box with a border drawn by [`Graphics::draw_outline`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_outlined_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        xb: f64,
        yb: f64,
        bg_color: Color,
        border_color: Color,
    ) {
        self.draw_rect(x + xb, y + yb, w - 2.0 * xb, h - 2.0 * yb, bg_color);
        self.draw_outline(x, y, w, h, xb, yb, border_color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: f64) {
        self.surface.stroke_line(x0, y0, x1, y1, color, width);
    }

    /// Draws a closed polygon defined in model space.
    ///
    /// Each vertex is rotated by `dir` radians about the model origin, scaled,
    /// then translated to `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_poly(
        &mut self,
        points: &[Point],
        x: f64,
        y: f64,
        dir: f64,
        scale: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) {
        if points.is_empty() || (stroke.is_none() && fill.is_none()) {
            return;
        }
        let placed: Vec<Point> = points
            .iter()
            .map(|pt| pt.rotate(dir).scale(scale).offset(x, y))
            .collect();
        self.surface.polygon(&placed, stroke, fill);
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
        self.surface.fill_circle(x, y, r, color);
    }

    /// Draws `text` with the top of its line box at `y`.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.surface.draw_text_top(x, y, text, color);
    }

    /// Size of `text`, treating `\n` as line breaks.
    pub fn measure_text(&self, text: &str) -> TextSize {
        layout::measure_text(&self.surface, text)
    }

    /// Draws `text` centered in `[x, x + w]`; never starts left of `x`.
    pub fn draw_centered_text(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        text: &str,
        color: Color,
    ) -> TextSize {
        let size = self.measure_text(text);
        let tx = Justify::Center.start_x(x, w, size.width);
        self.draw_text(tx, y, text, color);
        size
    }

    pub fn split_text(&self, text: &str, width: f64) -> Vec<String> {
        layout::split_text(&self.surface, text, width)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_paragraph(
        &mut self,
        msg: &str,
        x: f64,
        y: f64,
        w: f64,
        color: Option<Color>,
        style: &ParagraphStyle,
    ) -> TextSize {
        layout::draw_paragraph(&mut self.surface, msg, x, y, w, color, style)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_vcentered_paragraph(
        &mut self,
        msg: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Option<Color>,
        style: &ParagraphStyle,
    ) -> TextSize {
        layout::draw_vcentered_paragraph(&mut self.surface, msg, x, y, w, h, color, style)
    }

    /// Single aligned line with an optional shadow offset by the configured
    /// `shadow_shift`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_justified_text(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        text: &str,
        justify: Justify,
        color: Color,
        shadow: Option<Color>,
    ) -> TextSize {
        layout::draw_justified_text(
            &mut self.surface,
            &self.text,
            x,
            y,
            w,
            text,
            justify,
            color,
            shadow,
        )
    }
}
