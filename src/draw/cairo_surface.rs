//! Cairo + Pango implementation of [`Surface`].

use super::color::Color;
use super::font::FontDescriptor;
use super::point::Point;
use super::surface::{Surface, TextMeasurer};

/// Drawing surface backed by a Cairo context, with Pango for text.
///
/// The line height equals the font size in pixels. Cairo reports failures as
/// sticky context state, so drawing errors are logged and otherwise ignored.
pub struct CairoSurface {
    ctx: cairo::Context,
    layout: pango::Layout,
    font: FontDescriptor,
    font_size: f64,
    width: f64,
    height: f64,
}

impl CairoSurface {
    /// Wraps an existing context whose target is `width` x `height` pixels.
    pub fn new(
        ctx: cairo::Context,
        width: f64,
        height: f64,
        font: FontDescriptor,
        font_size: f64,
    ) -> Self {
        // Gray antialiasing; subpixel AA fringes on ARGB targets.
        ctx.set_antialias(cairo::Antialias::Best);
        let layout = pangocairo::functions::create_layout(&ctx);
        let mut surface = Self {
            ctx,
            layout,
            font,
            font_size,
            width,
            height,
        };
        surface.apply_font();
        surface
    }

    /// Creates a context drawing onto `image`.
    pub fn for_image(
        image: &cairo::ImageSurface,
        font: FontDescriptor,
        font_size: f64,
    ) -> Result<Self, cairo::Error> {
        let ctx = cairo::Context::new(image)?;
        Ok(Self::new(
            ctx,
            f64::from(image.width()),
            f64::from(image.height()),
            font,
            font_size,
        ))
    }

    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    fn apply_font(&mut self) {
        let desc_str = self.font.to_pango_string(self.font_size);
        log::debug!("Using font '{}'", desc_str);
        let desc = pango::FontDescription::from_string(&desc_str);
        self.layout.set_font_description(Some(&desc));
    }

    fn set_source(&self, color: Color) {
        let (r, g, b) = color.to_unit_rgb();
        self.ctx.set_source_rgb(r, g, b);
    }
}

fn check(op: &str, result: Result<(), cairo::Error>) {
    if let Err(e) = result {
        log::warn!("Cairo {} failed: {}", op, e);
    }
}

impl TextMeasurer for CairoSurface {
    fn measure_text_width(&self, text: &str) -> f64 {
        self.layout.set_text(text);
        let (_ink_rect, logical_rect) = self.layout.extents();
        logical_rect.width() as f64 / pango::SCALE as f64
    }

    fn line_height(&self) -> f64 {
        self.font_size
    }
}

impl Surface for CairoSurface {
    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.apply_font();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_source(color);
        self.ctx.rectangle(x, y, w, h);
        check("fill", self.ctx.fill());
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: f64) {
        self.set_source(color);
        self.ctx.set_line_width(width);
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        check("stroke", self.ctx.stroke());
    }

    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.ctx.new_path();
        self.ctx.move_to(first.x, first.y);
        for pt in rest {
            self.ctx.line_to(pt.x, pt.y);
        }
        self.ctx.close_path();

        if let Some(color) = stroke {
            self.set_source(color);
            self.ctx.set_line_width(1.0);
            if fill.is_some() {
                check("stroke", self.ctx.stroke_preserve());
            } else {
                check("stroke", self.ctx.stroke());
            }
        }
        if let Some(color) = fill {
            self.set_source(color);
            check("fill", self.ctx.fill());
        }
        self.ctx.new_path();
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_source(color);
        self.ctx.new_path();
        self.ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
        check("fill", self.ctx.fill());
    }

    fn draw_text_top(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.layout.set_text(text);

        // Pango draws from the layout's top-left; shift so the first baseline
        // lands at y + line_height.
        let baseline = self.layout.baseline() as f64 / pango::SCALE as f64;
        let top = y + self.line_height() - baseline;

        self.set_source(color);
        self.ctx.move_to(x, top);
        pangocairo::functions::show_layout(&self.ctx, &self.layout);
        self.ctx.new_path();
    }
}
