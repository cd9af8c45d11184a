//! 2D drawing support: colors, points, and wrapped/justified text layout.
//!
//! The layout engine talks to the host renderer only through the
//! [`draw::TextMeasurer`] and [`draw::Surface`] traits. A Cairo + Pango
//! implementation and a command-recording implementation are included.

pub mod config;
pub mod draw;
pub mod layout;
pub mod util;

pub use config::Config;
pub use draw::{Color, Graphics, Point};
