use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::{format_hsl, format_rgba, rgba_to_hex, Rgba};
use crate::error::ShadeError;

/// Output encoding for palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`
    #[default]
    Rgba,
    /// `hsl(Hdeg, S%, L%)`
    Hsl,
    /// `#RRGGBB` or `#RRGGBBAA`
    Hex,
}

impl ColorFormat {
    /// Render a color in this format.
    ///
    /// An alpha of exactly 1 is treated as "no alpha channel": `Rgba`
    /// renders `rgb(...)` and `Hex` renders six digits.
    pub fn render(self, color: &Rgba) -> String {
        match self {
            ColorFormat::Rgba => {
                let visible = color.a.filter(|a| *a != 1.0);
                format_rgba(&color.with_alpha(visible))
            }
            ColorFormat::Hsl => format_hsl(color),
            ColorFormat::Hex => rgba_to_hex(color, true, !color.is_explicitly_opaque()),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Rgba => write!(f, "rgba"),
            ColorFormat::Hsl => write!(f, "hsl"),
            ColorFormat::Hex => write!(f, "hex"),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rgba" => Ok(ColorFormat::Rgba),
            "hsl" => Ok(ColorFormat::Hsl),
            "hex" => Ok(ColorFormat::Hex),
            _ => Err(ShadeError::UnknownFormat(s.to_string())),
        }
    }
}
