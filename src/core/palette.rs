use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Blend fractions controlling the contrast of derived palette roles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteBlend {
    /// Fraction of the background mixed into the text color for borders.
    pub border: f64,
    /// Fraction of the text color mixed into the background for panels.
    pub panel: f64,
}

impl PaletteBlend {
    pub const DEFAULT_BORDER: f64 = 0.4;
    pub const DEFAULT_PANEL: f64 = 0.06;
}

impl Default for PaletteBlend {
    fn default() -> Self {
        Self {
            border: Self::DEFAULT_BORDER,
            panel: Self::DEFAULT_PANEL,
        }
    }
}

/// Five-role theme palette, derived fresh on every render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Rgb,
    pub background: Rgb,
    pub border: Rgb,
    pub panel: Rgb,
    pub accent: Rgb,
}

impl Palette {
    /// Derives border and panel as linear blends of text/background so line
    /// and surface contrast follows the page's actual theme.
    #[must_use]
    pub fn derive(text: Rgb, background: Rgb, accent: Rgb, blend: PaletteBlend) -> Self {
        Self {
            text,
            background,
            border: text.mix(background, blend.border),
            panel: background.mix(text, blend.panel),
            accent,
        }
    }
}
