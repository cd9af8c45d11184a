//! Text layout: greedy line wrapping, paragraphs and justified lines.
//!
//! Everything here is recomputed on each call from the measurer's answers;
//! nothing is cached between frames.

pub mod paragraph;
pub mod wrap;

pub use paragraph::{
    Justify, ParagraphStyle, TextSize, draw_justified_text, draw_paragraph,
    draw_vcentered_paragraph, measure_text,
};
pub use wrap::{end_of_word, split_text};
