//! Paragraph and single-line text formatting on top of [`split_text`].

use super::wrap::split_text;
use crate::config::TextConfig;
use crate::draw::{Color, Surface, TextMeasurer};

/// Marker that forces a wrapped line to be centered when it starts the line.
const CENTER_MARKER: char = '\t';

/// Size of a block of laid-out text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Formatting options for [`draw_paragraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    /// Center every line within the paragraph width
    pub center: bool,
    /// Bullet string; lines not starting with it get a hanging indent of its width
    pub list_char: String,
}

impl ParagraphStyle {
    pub fn centered() -> Self {
        Self {
            center: true,
            list_char: String::new(),
        }
    }

    pub fn list(marker: impl Into<String>) -> Self {
        Self {
            center: false,
            list_char: marker.into(),
        }
    }
}

/// Horizontal alignment of a single line within a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

impl Justify {
    /// Maps a signed code: negative = left, zero = center, positive = right.
    pub fn from_code(code: i32) -> Self {
        match code {
            c if c < 0 => Justify::Left,
            0 => Justify::Center,
            _ => Justify::Right,
        }
    }

    /// Left edge for text `text_width` wide in the box `[x, x + w]`.
    ///
    /// Text wider than the box starts at `x` rather than spilling left.
    pub fn start_x(self, x: f64, w: f64, text_width: f64) -> f64 {
        let nx = match self {
            Justify::Left => x,
            Justify::Center => x + (w - text_width) / 2.0,
            Justify::Right => x + w - text_width,
        };
        nx.max(x)
    }
}

/// Measures `text` as a block: the widest `\n`-separated line and one line
/// height per line.
pub fn measure_text<M>(measurer: &M, text: &str) -> TextSize
where
    M: TextMeasurer + ?Sized,
{
    let mut width: f64 = 0.0;
    let mut lines = 0;
    for line in text.split('\n') {
        width = width.max(measurer.measure_text_width(line));
        lines += 1;
    }
    TextSize {
        width,
        height: measurer.line_height() * lines as f64,
    }
}

/// Wraps `msg` to width `w` and draws it line by line from `(x, y)`.
///
/// A line starting with a tab is centered (tab removed) even when
/// `style.center` is off. With `color` set to `None` nothing is drawn but the
/// returned size is still computed.
pub fn draw_paragraph<S>(
    surface: &mut S,
    msg: &str,
    x: f64,
    y: f64,
    w: f64,
    color: Option<Color>,
    style: &ParagraphStyle,
) -> TextSize
where
    S: Surface + ?Sized,
{
    let lines = split_text(&*surface, msg, w);
    let line_h = surface.line_height();
    let list_indent = if style.list_char.is_empty() {
        0.0
    } else {
        surface.measure_text_width(&style.list_char)
    };

    let mut ty = y;
    for raw in &lines {
        let (line, force_center) = match raw.strip_prefix(CENTER_MARKER) {
            Some(rest) => (rest, true),
            None => (raw.as_str(), false),
        };

        let mut tx = x;
        if style.center || force_center {
            let tw = surface.measure_text_width(line);
            tx += ((w - tw) / 2.0).floor();
        }
        if !style.list_char.is_empty() && !line.starts_with(style.list_char.as_str()) {
            tx += list_indent;
        }
        if let Some(color) = color {
            surface.draw_text_top(tx, ty, line, color);
        }
        ty += line_h;
    }

    log::debug!(
        "Paragraph of {} lines at ({:.1}, {:.1}) width {:.1}",
        lines.len(),
        x,
        y,
        w
    );

    TextSize {
        width: w,
        height: lines.len() as f64 * line_h,
    }
}

/// Like [`draw_paragraph`], but centers the wrapped block vertically in a box
/// of height `h` starting at `y`.
#[allow(clippy::too_many_arguments)]
pub fn draw_vcentered_paragraph<S>(
    surface: &mut S,
    msg: &str,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Option<Color>,
    style: &ParagraphStyle,
) -> TextSize
where
    S: Surface + ?Sized,
{
    let block_height = split_text(&*surface, msg, w).len() as f64 * surface.line_height();
    let top = y + (h - block_height) / 2.0;
    draw_paragraph(surface, msg, x, top, w, color, style)
}

/// Draws one unwrapped line aligned within `[x, x + w]`.
///
/// When `shadow` is set, a copy is drawn first in that color, shifted
/// diagonally by `text_config.shadow_shift` pixels.
#[allow(clippy::too_many_arguments)]
pub fn draw_justified_text<S>(
    surface: &mut S,
    text_config: &TextConfig,
    x: f64,
    y: f64,
    w: f64,
    text: &str,
    justify: Justify,
    color: Color,
    shadow: Option<Color>,
) -> TextSize
where
    S: Surface + ?Sized,
{
    let size = measure_text(&*surface, text);
    let tx = justify.start_x(x, w, size.width);
    if let Some(shadow) = shadow {
        let shift = text_config.shadow_shift;
        surface.draw_text_top(tx + shift, y + shift, text, shadow);
    }
    surface.draw_text_top(tx, y, text, color);
    size
}
