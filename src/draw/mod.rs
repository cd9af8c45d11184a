//! Drawing primitives and surfaces.
//!
//! This module defines the core drawing types:
//! - [`Color`]: 8-bit RGB color with fade/darken/contrast helpers
//! - [`Point`]: 2D point with polar rotation
//! - [`Surface`] / [`TextMeasurer`]: the boundary to a rendering backend
//! - [`CairoSurface`]: Cairo + Pango backend
//! - [`RecordingSurface`]: backend that records commands (dry runs, tests)
//! - [`Graphics`]: immediate-mode façade tying the above to the layout engine

pub mod cairo_surface;
pub mod color;
pub mod font;
pub mod graphics;
pub mod point;
pub mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::{Color, FormatError};
pub use font::FontDescriptor;
pub use graphics::Graphics;
pub use point::{Point, Polar};
pub use recording::{DrawCommand, MonospaceMeasurer, RecordingSurface, ScalableMeasurer};
pub use surface::{Surface, TextMeasurer};

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, RED, WHITE, YELLOW};
