//! Color palettes and color exploration.
//!
//! Given the dominant colors of an image (computed by any palette
//! extraction library), [`Explorer`] names them.  For any selected
//! color, [`describe_color`] gathers:
//!
//! - its [`HexColor`], RGB, [`Hsl`] and [`Cmyk`] forms (see [`convert`]);
//! - harmonious [`Scheme`]s: monochromatic, analogous, complementary,
//!   split-complementary, triadic and tetradic (see [`scheme`]);
//! - its WCAG [`ContrastAssessment`] against black or white (see
//!   [`contrast`]);
//! - how it looks with four kinds of color blindness (see [`vision`]).
//!
//! Every per-color operation is also available as a method of the
//! [`RGBColor`] trait on the pixel types of the [`rgb`] crate.
//!
//! ```
//! use rgb::RGB8;
//! use shadex::{describe_hex, RGBColor};
//!
//! let d = describe_hex("#3366cc")?;
//! assert_eq!(d.hsl.to_string(), "hsl(220, 60%, 50%)");
//! assert_eq!(d.schemes[2].colors[1].h(), 40); // complementary hue
//!
//! let c = RGB8::new(0x33, 0x66, 0xcc);
//! assert_eq!(c.hex().to_string(), "#3366cc");
//! assert!(c.contrast_ratio(&RGB8::new(255, 255, 255)) > 4.5);
//! # Ok::<(), shadex::ColorError>(())
//! ```
//!
//! All functions are pure; nothing is cached and no color is
//! remembered between calls.

use rgb::{RGBA, RGB8, RGBA8};

pub mod error;
pub mod config;
pub mod convert;
pub mod contrast;
pub mod scheme;
pub mod vision;
pub mod names;
pub mod export;
pub mod palette;

pub use error::{ColorError, Result};
pub use config::PaletteConfig;
pub use convert::{Cmyk, HexColor, Hsl};
pub use contrast::ContrastAssessment;
pub use scheme::{Scheme, SchemeKind};
pub use vision::{Deficiency, Simulation};
pub use names::{ColorNamer, NearestName};
pub use export::ExportFormat;
pub use palette::{describe_color, describe_hex, extract_palette,
                  ColorDescription, Explorer, NamedColor};

/// Round and clamp a \[0, 255\] float channel.
#[inline]
fn channel(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The color as 8 bits channels, rounded and clamped.  Alpha is
    /// dropped.
    fn to_rgb8(&self) -> RGB8 {
        let RGBA { r, g, b, .. } = self.to_rgba();
        RGB8 { r: channel(r), g: channel(g), b: channel(b) }
    }

    /// Same alpha as `self`, color `c`.
    fn with_rgb8(&self, c: RGB8) -> Self {
        let a = self.to_rgba().a;
        Self::from_rgba(RGBA { r: c.r as f64, g: c.g as f64, b: c.b as f64, a })
    }

    /// Return the hexadecimal form of the color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use shadex::RGBColor;
    /// assert_eq!(RGB8::new(255, 165, 0).hex().to_string(), "#ffa500");
    /// ```
    #[inline]
    fn hex(&self) -> HexColor { convert::rgb_to_hex(self.to_rgb8()) }

    #[inline]
    fn hsl(&self) -> Hsl { convert::rgb_to_hsl(self.to_rgb8()) }

    #[inline]
    fn cmyk(&self) -> Cmyk { convert::rgb_to_cmyk(self.to_rgb8()) }

    /// WCAG relative luminance, in \[0, 1\].
    #[inline]
    fn luminance(&self) -> f64 { contrast::relative_luminance(self.to_rgb8()) }

    /// Quick perceived brightness, in \[0, 255\].  See [`contrast`].
    #[inline]
    fn brightness(&self) -> f64 { contrast::brightness(self.to_rgb8()) }

    /// WCAG contrast ratio with `other`, in \[1, 21\].
    fn contrast_ratio<C: RGBColor>(&self, other: &C) -> f64 {
        contrast::contrast_ratio(self.to_rgb8(), other.to_rgb8())
    }

    /// Black or white (keeping the alpha of `self`), whichever is the
    /// default text color on `self`.
    fn contrasting(&self) -> Self {
        self.with_rgb8(contrast::best_contrasting_color(self.to_rgb8()).rgb())
    }

    /// Return how the color looks with the deficiency `d`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use shadex::{Deficiency, RGBColor};
    /// let g = RGB8::new(12, 200, 99).simulate(Deficiency::Achromatopsia);
    /// assert!(g.r == g.g && g.g == g.b);
    /// ```
    fn simulate(&self, d: Deficiency) -> Self {
        self.with_rgb8(d.simulate(self.to_rgb8()))
    }

    /// All schemes with this color as base.
    #[inline]
    fn schemes(&self) -> Vec<Scheme> { scheme::generate_all(self.hsl()) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r),  g: channel(c.g),  b: channel(c.b) }
    }

    #[inline]
    fn to_rgb8(&self) -> RGB8 { *self }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: channel(c.r),  g: channel(c.g),  b: channel(c.b),
                a: channel(c.a) }
    }
}

impl RGBColor for HexColor {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { self.rgb().to_rgba() }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { HexColor::from(RGB8::from_rgba(c)) }

    #[inline]
    fn to_rgb8(&self) -> RGB8 { self.rgb() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_channels() {
        let c = RGB8::from_rgba(RGBA { r: 300., g: -4., b: 127.6, a: 255. });
        assert_eq!(c, RGB8::new(255, 0, 128));
        let c = RGBA { r: 1e9, g: f64::NAN, b: 0.4, a: 1. };
        assert_eq!(c.to_rgb8(), RGB8::new(255, 0, 0));
    }

    #[test]
    fn gray_is_achromatopsia() {
        for c in [RGB8::new(0x33, 0x66, 0xcc), RGB8::new(200, 10, 70),
                  RGB8::new(0, 255, 0)] {
            assert_eq!(c.to_gray(), c.simulate(Deficiency::Achromatopsia));
        }
    }

    #[test]
    fn alpha_is_kept() {
        let c = RGBA8::new(10, 20, 30, 77);
        assert_eq!(c.contrasting(), RGBA8::new(255, 255, 255, 77));
        assert_eq!(c.simulate(Deficiency::Protanopia).a, 77);
        assert_eq!(c.hex(), HexColor::new(10, 20, 30));
    }

    #[test]
    fn methods_match_functions() {
        let c = RGB8::new(0x33, 0x66, 0xcc);
        let h = HexColor::new(0x33, 0x66, 0xcc);
        assert_eq!(c.hsl(), h.hsl());
        assert_eq!(c.cmyk(), convert::rgb_to_cmyk(c));
        assert_eq!(c.luminance(), contrast::relative_luminance(c));
        assert_eq!(c.contrast_ratio(&HexColor::WHITE),
                   contrast::contrast_ratio(c, RGB8::new(255, 255, 255)));
        assert_eq!(c.schemes(), describe_color(&h).schemes);
        assert_eq!(h.contrasting(), HexColor::WHITE);
    }
}
