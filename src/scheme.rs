//! Harmonious color schemes derived from one base color.
//!
//! Every scheme keeps the saturation and lightness of the base color
//! and moves the hue around the color wheel, except the monochromatic
//! one which keeps the hue and moves the lightness.  Hues wrap
//! (350° + 30° is 20°); lightness is clamped per color, so near black
//! or white several monochromatic colors may coincide.

use std::fmt;
use serde::Serialize;
use crate::Hsl;

/// The kinds of schemes, in the order they are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeKind {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 6] = [
        SchemeKind::Monochromatic,
        SchemeKind::Analogous,
        SchemeKind::Complementary,
        SchemeKind::SplitComplementary,
        SchemeKind::Triadic,
        SchemeKind::Tetradic,
    ];

    /// Stable key of the scheme kind (e.g. `"splitComplementary"`).
    pub fn as_str(&self) -> &'static str {
        use SchemeKind::*;
        match self {
            Monochromatic => "monochromatic",
            Analogous => "analogous",
            Complementary => "complementary",
            SplitComplementary => "splitComplementary",
            Triadic => "triadic",
            Tetradic => "tetradic",
        }
    }

    /// One sentence telling what the scheme is good for.
    pub fn description(&self) -> &'static str {
        use SchemeKind::*;
        match self {
            Monochromatic => "Uses variations in lightness and saturation of \
                              a single color. Great for creating a harmonious, \
                              cohesive look.",
            Analogous => "Uses colors that are next to each other on the color \
                          wheel. Ideal for creating a harmonious and balanced \
                          design.",
            Complementary => "Uses colors opposite each other on the color \
                              wheel. Perfect for creating strong contrast and \
                              making things stand out.",
            SplitComplementary => "Uses a color and the two colors adjacent \
                                   to its complement. Keeps strong contrast \
                                   with less tension than a complementary \
                                   pair.",
            Triadic => "Uses three colors equally spaced around the color \
                        wheel. Good for creating vibrant and balanced color \
                        schemes.",
            Tetradic => "Uses four colors equally spaced around the color \
                         wheel. Provides a wide range of colors for a more \
                         complex and dynamic design.",
        }
    }

    /// Hue offsets (in degrees) of the scheme colors, or lightness
    /// offsets for [`SchemeKind::Monochromatic`].
    fn offsets(&self) -> &'static [i32] {
        use SchemeKind::*;
        match self {
            Monochromatic | Analogous => &[-30, -15, 0, 15, 30],
            Complementary => &[0, 180],
            SplitComplementary => &[0, 150, 210],
            Triadic => &[0, 120, 240],
            Tetradic => &[0, 90, 180, 270],
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of colors built from a base color.
///
/// The base color itself is always part of the scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub kind: SchemeKind,
    pub colors: Vec<Hsl>,
}

impl Scheme {
    /// Build the scheme of the given kind around `base`.
    pub fn new(kind: SchemeKind, base: Hsl) -> Self {
        let colors = kind.offsets().iter().map(|&d| {
            if kind == SchemeKind::Monochromatic { base.lighten(d) }
            else { base.rotate(d) }
        }).collect();
        Scheme { kind, colors }
    }

    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Schemes are never empty; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The colors of the scheme as hex colors.
    pub fn hex_colors(&self) -> Vec<crate::HexColor> {
        self.colors.iter().map(Hsl::to_hex).collect()
    }
}

/// Five colors with the base hue, lightness −30, −15, 0, +15, +30.
pub fn monochromatic(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::Monochromatic, base)
}

/// Five colors with hues −30°, −15°, 0°, +15°, +30° from the base.
pub fn analogous(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::Analogous, base)
}

/// The base color and the opposite hue.
pub fn complementary(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::Complementary, base)
}

/// The base color and the two hues 30° on either side of its complement.
pub fn split_complementary(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::SplitComplementary, base)
}

/// The base color and the hues at +120° and +240°.
pub fn triadic(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::Triadic, base)
}

/// The base color and the hues at +90°, +180° and +270°.
pub fn tetradic(base: Hsl) -> Scheme {
    Scheme::new(SchemeKind::Tetradic, base)
}

/// All schemes around `base`, in the order of [`SchemeKind::ALL`].
pub fn generate_all(base: Hsl) -> Vec<Scheme> {
    SchemeKind::ALL.iter().map(|&k| Scheme::new(k, base)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn hues(s: &Scheme) -> Vec<u16> { s.colors.iter().map(|c| c.h()).collect() }

    #[test]
    fn cardinalities() {
        let base = Hsl::new(220, 60, 50);
        for s in generate_all(base) {
            let n = match s.kind {
                SchemeKind::Monochromatic | SchemeKind::Analogous => 5,
                SchemeKind::Complementary => 2,
                SchemeKind::SplitComplementary | SchemeKind::Triadic => 3,
                SchemeKind::Tetradic => 4,
            };
            assert_eq!(s.len(), n, "{}", s.kind);
            assert!(s.colors.contains(&base), "{} lost the base", s.kind);
        }
    }

    #[test]
    fn analogous_wraps() {
        let s = analogous(Hsl::new(350, 50, 50));
        assert_eq!(hues(&s), vec![320, 335, 350, 5, 20]);
        let s = analogous(Hsl::new(10, 50, 50));
        assert_eq!(hues(&s), vec![340, 355, 10, 25, 40]);
        assert!(s.colors.iter().all(|c| c.s() == 50 && c.l() == 50));
    }

    #[test]
    fn monochromatic_lightness() {
        let base = Hsl::new(220, 60, 50);
        let s = monochromatic(base);
        let l: Vec<_> = s.colors.iter().map(|c| c.l()).collect();
        assert_eq!(l, vec![20, 35, 50, 65, 80]);
        assert_eq!(s.colors[2], base);
        assert!(s.colors.iter().all(|c| c.h() == 220 && c.s() == 60));
    }

    #[test]
    fn monochromatic_clamps() {
        let l: Vec<_> = monochromatic(Hsl::new(0, 50, 90)).colors.iter()
            .map(|c| c.l()).collect();
        assert_eq!(l, vec![60, 75, 90, 100, 100]);
        let l: Vec<_> = monochromatic(Hsl::new(0, 50, 10)).colors.iter()
            .map(|c| c.l()).collect();
        assert_eq!(l, vec![0, 0, 10, 25, 40]);
    }

    #[test]
    fn wheel_schemes() {
        let base = Hsl::new(220, 60, 50);
        assert_eq!(hues(&complementary(base)), vec![220, 40]);
        assert_eq!(hues(&split_complementary(base)), vec![220, 10, 70]);
        assert_eq!(hues(&triadic(base)), vec![220, 340, 100]);
        assert_eq!(hues(&tetradic(base)), vec![220, 310, 40, 130]);
        assert_eq!(hues(&split_complementary(Hsl::new(0, 10, 10))),
                   vec![0, 150, 210]);
    }

    #[test]
    fn pure() {
        let base = Hsl::new(123, 45, 67);
        assert_eq!(generate_all(base), generate_all(base));
        assert_eq!(base, Hsl::new(123, 45, 67));
    }

    #[test]
    fn hex_colors() {
        let s = complementary(Hsl::new(220, 60, 50));
        let hex: Vec<_> = s.hex_colors().iter().map(|h| h.to_string()).collect();
        assert_eq!(hex, vec!["#3366cc", "#cc9933"]);
    }

    #[test]
    fn keys() {
        assert_eq!(SchemeKind::SplitComplementary.as_str(), "splitComplementary");
        assert_eq!(serde_json::to_string(&SchemeKind::SplitComplementary).unwrap(),
                   "\"splitComplementary\"");
        assert!(SchemeKind::ALL.iter().all(|k| !k.description().is_empty()));
    }
}
