//! The fixed, ordered color palette assigned to category labels by position.

use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

/// The colors used when no custom palette is configured.
const DEFAULT_COLORS: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#a4de6c"];

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PaletteError(String);

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for PaletteError {}

/// An ordered, non-empty list of hex colors assigned to category labels by position.
///
/// Lookup is cyclic: when there are more labels than colors, colors repeat once every `len`
/// labels, so every label always receives a color deterministically.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Creates a `Palette` from a list of color strings. The list must be non-empty and every
    /// entry must be a `#`-prefixed hex color.
    pub fn new<S, I>(colors: I) -> Result<Self, PaletteError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let colors: Vec<String> = colors.into_iter().map(|s| s.into()).collect();
        if colors.is_empty() {
            return Err(PaletteError(String::from(
                "A palette must contain at least one color",
            )));
        }
        for color in &colors {
            validate_color(color)?;
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Returns the color for the label at `index`, wrapping around when `index` exceeds the
    /// palette length.
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

/// A color must be `#` followed by 3, 6 or 8 hex digits, e.g. `#8884d8`.
fn validate_color(s: impl AsRef<str>) -> Result<(), PaletteError> {
    let s = s.as_ref();
    let digits = match s.strip_prefix('#') {
        Some(digits) => digits,
        None => {
            return Err(PaletteError(format!(
                "A color must start with '#', but got '{s}'"
            )))
        }
    };

    if !matches!(digits.len(), 3 | 6 | 8) {
        return Err(PaletteError(format!(
            "A color must have 3, 6 or 8 hex digits, but '{s}' has {}",
            digits.len()
        )));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(PaletteError(format!(
            "A color must be hex digits after the '#'. '{s}' has illegal char '{bad}'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors().len(), 5);
        assert_eq!(palette.color_for(0), "#8884d8");
        assert_eq!(palette.color_for(1), "#82ca9d");
        assert_eq!(palette.color_for(2), "#ffc658");
    }

    #[test]
    fn test_color_for_wraps_around() {
        let palette = Palette::new(vec!["#111111", "#222222"]).unwrap();
        assert_eq!(palette.color_for(0), "#111111");
        assert_eq!(palette.color_for(1), "#222222");
        assert_eq!(palette.color_for(2), "#111111");
        assert_eq!(palette.color_for(5), "#222222");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_valid_colors() {
        validate_color("#abc").unwrap();
        validate_color("#8884d8").unwrap();
        validate_color("#8884d8ff").unwrap();
        validate_color("#FFC658").unwrap();
    }

    #[test]
    fn test_invalid_color_missing_hash() {
        assert!(validate_color("8884d8").is_err());
    }

    #[test]
    fn test_invalid_color_bad_length() {
        assert!(validate_color("#8884d").is_err());
        assert!(validate_color("#").is_err());
    }

    #[test]
    fn test_invalid_color_bad_char() {
        assert!(validate_color("#8884dz").is_err());
        assert!(validate_color("#88 4d8").is_err());
    }
}
