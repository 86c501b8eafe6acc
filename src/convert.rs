//! Conversions between the color representations: RGB, HEX, HSL and CMYK.
//!
//! RGB is the canonical form (an [`RGB8`], so channels are always in
//! \[0, 255\]).  HEX ↔ RGB is lossless.  HSL and CMYK hold integer
//! percentages, so going through them rounds: `RGB → HSL → RGB` is
//! only guaranteed to come back within 5 units per channel (most
//! colors come back within 1 or 2).

use std::{fmt, str::FromStr};
use rgb::RGB8;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::{ColorError, Result};

/// A color written as six hexadecimal digits.
///
/// Displays in canonical form, lowercase with a leading `#`
/// (e.g. `#3366cc`).  Parsing accepts an optional `#` and either case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(RGB8);

impl HexColor {
    pub const BLACK: HexColor = HexColor(RGB8 { r: 0, g: 0, b: 0 });
    pub const WHITE: HexColor = HexColor(RGB8 { r: 255, g: 255, b: 255 });

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { HexColor(RGB8 { r, g, b }) }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorError::InvalidHexLength { len });
        }
        let mut rgb = [0u8; 3];
        for (i, c) in digits.chars().enumerate() {
            let d = c.to_digit(16)
                .ok_or(ColorError::InvalidHexDigit { digit: c })?;
            rgb[i / 2] = rgb[i / 2] << 4 | d as u8;
        }
        Ok(HexColor::new(rgb[0], rgb[1], rgb[2]))
    }

    /// The RGB value of this color.
    #[inline]
    pub fn rgb(&self) -> RGB8 { self.0 }
}

impl From<RGB8> for HexColor {
    #[inline]
    fn from(c: RGB8) -> Self { HexColor(c) }
}

impl From<HexColor> for RGB8 {
    #[inline]
    fn from(c: HexColor) -> Self { c.0 }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> { HexColor::parse(s) }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A color in the HSL representation.
///
/// The hue is in degrees and always lies in \[0, 360): it wraps around.
/// Saturation and lightness are percentages clamped to \[0, 100\].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Create an HSL color, wrapping `h` modulo 360 and clamping `s`
    /// and `l` to \[0, 100\].
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Hsl { h: h.rem_euclid(360) as u16,
              s: s.clamp(0, 100) as u8,
              l: l.clamp(0, 100) as u8 }
    }

    /// Hue in degrees, in \[0, 360).
    #[inline]
    pub fn h(&self) -> u16 { self.h }

    /// Saturation in percent.
    #[inline]
    pub fn s(&self) -> u8 { self.s }

    /// Lightness in percent.
    #[inline]
    pub fn l(&self) -> u8 { self.l }

    /// Same color with the hue turned by `degrees` (possibly negative).
    #[inline]
    pub fn rotate(&self, degrees: i32) -> Self {
        Hsl::new(self.h as i32 + degrees, self.s as i32, self.l as i32)
    }

    /// Same color with `offset` added to the lightness (clamped).
    #[inline]
    pub fn lighten(&self, offset: i32) -> Self {
        Hsl::new(self.h as i32, self.s as i32, self.l as i32 + offset)
    }

    #[inline]
    pub fn to_rgb(&self) -> RGB8 { hsl_to_rgb(*self) }

    #[inline]
    pub fn to_hex(&self) -> HexColor { HexColor(hsl_to_rgb(*self)) }
}

/// CSS notation, e.g. `hsl(220, 60%, 50%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// A color in the CMYK representation, each component in percent.
///
/// Derived from RGB only, there is no way back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.c, self.m, self.y, self.k)
    }
}

/// Round a fraction in \[0, 1\] to a percentage.
#[inline]
fn percent(x: f64) -> u8 { (x * 100.).round().clamp(0., 100.) as u8 }

/// Round a fraction in \[0, 1\] to a byte.
#[inline]
pub(crate) fn byte(x: f64) -> u8 { (x * 255.).round().clamp(0., 255.) as u8 }

/// Return the hex form of `c`.
#[inline]
pub fn rgb_to_hex(c: RGB8) -> HexColor { HexColor(c) }

/// Parse a hex color, reporting malformed input.
#[inline]
pub fn parse_hex(hex: &str) -> Result<RGB8> { HexColor::parse(hex).map(|h| h.0) }

/// Parse a hex color, falling back to black on malformed input.
///
/// Use this for live-edited input where any color is better than an
/// error.  A black result does not mean the input was valid; use
/// [`parse_hex`] to find out.
pub fn hex_to_rgb(hex: &str) -> RGB8 {
    match parse_hex(hex) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("hex color {hex:?} rejected ({e}), using black");
            RGB8 { r: 0, g: 0, b: 0 }
        }
    }
}

/// Convert to HSL.  Achromatic colors get hue and saturation 0.
pub fn rgb_to_hsl(c: RGB8) -> Hsl {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    if c.r == c.g && c.g == c.b {
        return Hsl { h: 0, s: 0, l: percent(l) };
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = {
        if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
        else if max == g { (b - r) / d + 2. }
        else { (r - g) / d + 4. } };
    Hsl { h: ((h * 60.).round() as i32).rem_euclid(360) as u16,
          s: percent(s),
          l: percent(l) }
}

/// Convert to RGB with the chroma / hue-sector method.
pub fn hsl_to_rgb(hsl: Hsl) -> RGB8 {
    let s = hsl.s as f64 / 100.;
    let l = hsl.l as f64 / 100.;
    let c = (1. - (2. * l - 1.).abs()) * s;
    let hp = hsl.h as f64 / 60.;
    let x = c * (1. - (hp % 2. - 1.).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.),
        1 => (x, c, 0.),
        2 => (0., c, x),
        3 => (0., x, c),
        4 => (x, 0., c),
        _ => (c, 0., x),
    };
    let m = l - c / 2.;
    RGB8 { r: byte(r + m), g: byte(g + m), b: byte(b + m) }
}

/// Convert to CMYK.  Pure black gives `0, 0, 0, 100`.
pub fn rgb_to_cmyk(c: RGB8) -> Cmyk {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let k = 1. - r.max(g).max(b);
    if k >= 1. {
        return Cmyk { c: 0, m: 0, y: 0, k: 100 };
    }
    Cmyk { c: percent((1. - r - k) / (1. - k)),
           m: percent((1. - g - k) / (1. - k)),
           y: percent((1. - b - k) / (1. - k)),
           k: percent(k) }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> RGB8 { RGB8 { r, g, b } }

    #[test]
    fn hex_display() {
        assert_eq!(rgb_to_hex(rgb(0x33, 0x66, 0xcc)).to_string(), "#3366cc");
        assert_eq!(rgb_to_hex(rgb(0, 0, 0)).to_string(), "#000000");
        assert_eq!(rgb_to_hex(rgb(1, 2, 255)).to_string(), "#0102ff");
    }

    #[test]
    fn hex_parse() {
        assert_eq!(parse_hex("#3366cc").unwrap(), rgb(0x33, 0x66, 0xcc));
        assert_eq!(parse_hex("3366CC").unwrap(), rgb(0x33, 0x66, 0xcc));
        assert_eq!(parse_hex("#FfA500").unwrap(), rgb(255, 165, 0));
        let h: HexColor = "#ABCDEF".parse().unwrap();
        assert_eq!(h.to_string(), "#abcdef");
    }

    #[test]
    fn hex_parse_errors() {
        assert!(matches!(parse_hex("#fff"),
                         Err(ColorError::InvalidHexLength { len: 3 })));
        assert!(matches!(parse_hex(""),
                         Err(ColorError::InvalidHexLength { len: 0 })));
        assert!(matches!(parse_hex("##3366cc"),
                         Err(ColorError::InvalidHexLength { len: 7 })));
        assert!(matches!(parse_hex("#3366cg"),
                         Err(ColorError::InvalidHexDigit { digit: 'g' })));
        // `from_str_radix` would accept the sign.
        assert!(matches!(parse_hex("+12345"),
                         Err(ColorError::InvalidHexDigit { digit: '+' })));
        assert!(matches!(parse_hex("ééé"),
                         Err(ColorError::InvalidHexLength { len: 3 })));
        assert!(matches!(parse_hex("éééééé"),
                         Err(ColorError::InvalidHexDigit { digit: 'é' })));
    }

    #[test]
    fn hex_fallback() {
        assert_eq!(hex_to_rgb("#3366cc"), rgb(0x33, 0x66, 0xcc));
        assert_eq!(hex_to_rgb("not a color"), rgb(0, 0, 0));
        assert_eq!(hex_to_rgb("#12345"), rgb(0, 0, 0));
    }

    #[test]
    fn hsl_of_rgb() {
        assert_eq!(rgb_to_hsl(rgb(0x33, 0x66, 0xcc)), Hsl::new(220, 60, 50));
        assert_eq!(rgb_to_hsl(rgb(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(rgb(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(rgb(0, 0, 255)), Hsl::new(240, 100, 50));
        assert_eq!(rgb_to_hsl(rgb(255, 165, 0)), Hsl::new(39, 100, 50));
    }

    #[test]
    fn hsl_achromatic() {
        assert_eq!(rgb_to_hsl(rgb(0, 0, 0)), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(rgb(255, 255, 255)), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(rgb(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn rgb_of_hsl() {
        assert_eq!(hsl_to_rgb(Hsl::new(220, 60, 50)), rgb(51, 102, 204));
        assert_eq!(hsl_to_rgb(Hsl::new(40, 60, 50)), rgb(204, 153, 51));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 100, 50)), rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(300, 100, 50)), rgb(255, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(77, 0, 100)), rgb(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(77, 100, 0)), rgb(0, 0, 0));
    }

    #[test]
    fn hsl_normalizes() {
        let c = Hsl::new(-30, 150, -5);
        assert_eq!((c.h(), c.s(), c.l()), (330, 100, 0));
        assert_eq!(Hsl::new(720, 50, 50).h(), 0);
        assert_eq!(Hsl::new(350, 50, 50).rotate(30).h(), 20);
        assert_eq!(Hsl::new(10, 50, 90).lighten(30).l(), 100);
        assert_eq!(Hsl::new(220, 60, 50).to_string(), "hsl(220, 60%, 50%)");
    }

    #[test]
    fn cmyk() {
        assert_eq!(rgb_to_cmyk(rgb(0, 0, 0)), Cmyk { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(rgb_to_cmyk(rgb(255, 255, 255)), Cmyk { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(rgb_to_cmyk(rgb(255, 0, 0)), Cmyk { c: 0, m: 100, y: 100, k: 0 });
        let c = rgb_to_cmyk(rgb(0x33, 0x66, 0xcc));
        assert_eq!(c, Cmyk { c: 75, m: 50, y: 0, k: 20 });
        assert_eq!(c.to_string(), "75, 50, 0, 20");
    }

    #[test]
    fn hex_serde() {
        let h = HexColor::new(0x33, 0x66, 0xcc);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"#3366cc\"");
        let back: HexColor = serde_json::from_str("\"3366CC\"").unwrap();
        assert_eq!(back, h);
        assert!(serde_json::from_str::<HexColor>("\"#33\"").is_err());
    }
}
