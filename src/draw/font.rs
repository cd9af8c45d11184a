//! Font descriptor for Pango text rendering.

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// The size is kept separately because layout code changes it at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// The size is an absolute pixel size, truncated to whole pixels.
    /// Example: "Sans Bold 32px" or "Monospace Italic 24px"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}px", size.max(1.0).floor() as i32));

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", "normal")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_default_floors_size() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(16.9), "Sans 16px");
    }

    #[test]
    fn pango_string_italic_bold() {
        let font = FontDescriptor::new("Monospace", "bold", "italic");
        assert_eq!(font.to_pango_string(24.0), "Monospace Italic Bold 24px");
    }

    #[test]
    fn pango_string_never_below_one_pixel() {
        let font = FontDescriptor::new("DejaVu Serif", "light", "normal");
        assert_eq!(font.to_pango_string(0.2), "DejaVu Serif Light 1px");
    }
}
