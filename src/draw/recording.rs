//! In-memory surface that records draw calls instead of rasterizing them.
//!
//! Useful for dry-run layout, for golden tests of the layout engine and for
//! hosts that want to replay the commands onto their own backend.

use super::color::Color;
use super::point::Point;
use super::surface::{Surface, TextMeasurer};

/// Width of one glyph relative to the font size in [`MonospaceMeasurer::for_font_size`].
const MONOSPACE_ADVANCE_RATIO: f64 = 0.6;

/// Text measurer whose metrics follow the surface font size.
pub trait ScalableMeasurer: TextMeasurer {
    fn scale_to(&mut self, size: f64);
}

/// Measures text as `char count * char_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl MonospaceMeasurer {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    /// Approximates a typical monospace font at `size` pixels.
    pub fn for_font_size(size: f64) -> Self {
        Self::new(size * MONOSPACE_ADVANCE_RATIO, size)
    }
}

impl ScalableMeasurer for MonospaceMeasurer {
    /// Keeps the advance/height ratio, falling back to the default ratio for
    /// a degenerate measurer.
    fn scale_to(&mut self, size: f64) {
        let ratio = if self.line_height > 0.0 {
            self.char_width / self.line_height
        } else {
            MONOSPACE_ADVANCE_RATIO
        };
        self.char_width = size * ratio;
        self.line_height = size;
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// A single recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Polygon {
        points: Vec<Point>,
        stroke: Option<Color>,
        fill: Option<Color>,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

/// Surface that appends every draw call to a command list.
///
/// Text is measured by `M`, so layout can be recorded against any metrics.
#[derive(Debug, Clone)]
pub struct RecordingSurface<M = MonospaceMeasurer> {
    width: f64,
    height: f64,
    measurer: M,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasurer> RecordingSurface<M> {
    pub fn new(width: f64, height: f64, measurer: M) -> Self {
        Self {
            width,
            height,
            measurer,
            commands: Vec::new(),
        }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text commands only, as `(x, y, text)`.
    pub fn texts(&self) -> Vec<(f64, f64, &str)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingSurface<M> {
    fn measure_text_width(&self, text: &str) -> f64 {
        self.measurer.measure_text_width(text)
    }

    fn line_height(&self) -> f64 {
        self.measurer.line_height()
    }
}

impl<M: ScalableMeasurer> Surface for RecordingSurface<M> {
    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_font_size(&mut self, size: f64) {
        self.measurer.scale_to(size);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            color,
            width,
        });
    }

    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke,
            fill,
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center: Point::new(cx, cy),
            radius,
            color,
        });
    }

    fn draw_text_top(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
