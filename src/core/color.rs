use std::str::FromStr;

use color::{DynamicColor, Srgb};

/// RGB color on the CSS 0..=255 channel scale.
///
/// Channels stay `f64` so palette blends keep full precision; values are
/// rounded only when formatted back into a CSS string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    /// Neutral dark gray substituted for unreadable foreground colors.
    pub const FALLBACK_FOREGROUND: Self = Self::new(17.0, 17.0, 17.0);

    /// Default background when no ancestor supplies an opaque color.
    pub const FALLBACK_BACKGROUND: Self = Self::new(255.0, 255.0, 255.0);

    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Parses a CSS color string (`#rrggbb`, `rgb(...)`, `hsl(...)`, named
    /// colors, ...) onto the 8-bit channel grid computed styles use. Alpha
    /// is discarded; test transparency separately with
    /// [`Rgb::is_fully_transparent`].
    #[must_use]
    pub fn parse_css(input: &str) -> Option<Self> {
        let parsed = DynamicColor::from_str(input.trim()).ok()?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Some(Self::new(
            f64::from(rgba.r),
            f64::from(rgba.g),
            f64::from(rgba.b),
        ))
    }

    /// Parses a CSS color string, substituting the neutral fallback when the
    /// value is unreadable.
    #[must_use]
    pub fn parse_css_or_fallback(input: &str) -> Self {
        Self::parse_css(input).unwrap_or(Self::FALLBACK_FOREGROUND)
    }

    /// True when `input` parses to a fully transparent color
    /// (`rgba(0, 0, 0, 0)`, `transparent`, ...).
    #[must_use]
    pub fn is_fully_transparent(input: &str) -> bool {
        DynamicColor::from_str(input.trim())
            .map(|parsed| parsed.to_alpha_color::<Srgb>().components[3] == 0.0)
            .unwrap_or(false)
    }

    /// Linear per-channel blend: `self * (1 - amount) + other * amount`.
    #[must_use]
    pub fn mix(self, other: Self, amount: f64) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self::new(
            self.red * (1.0 - t) + other.red * t,
            self.green * (1.0 - t) + other.green * t,
            self.blue * (1.0 - t) + other.blue * t,
        )
    }

    /// CSS form with channels rounded to whole numbers, e.g. `rgb(17, 17, 17)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgb({}, {}, {})",
            self.red.round() as u8,
            self.green.round() as u8,
            self.blue.round() as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn parses_common_css_forms() {
        assert_eq!(Rgb::parse_css("rgb(17, 17, 17)"), Some(Rgb::new(17.0, 17.0, 17.0)));
        assert_eq!(Rgb::parse_css("#ffffff"), Some(Rgb::new(255.0, 255.0, 255.0)));
        let red = Rgb::parse_css("red").expect("named color");
        assert_eq!(red.to_css(), "rgb(255, 0, 0)");
    }

    #[test]
    fn unreadable_color_falls_back_to_neutral_gray() {
        assert_eq!(Rgb::parse_css("not-a-color"), None);
        assert_eq!(
            Rgb::parse_css_or_fallback("not-a-color"),
            Rgb::FALLBACK_FOREGROUND
        );
    }

    #[test]
    fn transparency_detection_matches_css_forms() {
        assert!(Rgb::is_fully_transparent("rgba(0, 0, 0, 0)"));
        assert!(Rgb::is_fully_transparent("transparent"));
        assert!(!Rgb::is_fully_transparent("rgba(0, 0, 0, 0.5)"));
        assert!(!Rgb::is_fully_transparent("rgb(0, 0, 0)"));
        assert!(!Rgb::is_fully_transparent("definitely-not-a-color"));
    }

    #[test]
    fn mix_endpoints_return_the_operands() {
        let a = Rgb::new(17.0, 17.0, 17.0);
        let b = Rgb::new(255.0, 255.0, 255.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
