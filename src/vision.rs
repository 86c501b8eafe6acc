//! Color-vision deficiency simulation.
//!
//! Each deficiency is a fixed 3×3 matrix applied to the RGB vector
//! (channels scaled to \[0, 1\]).  This is a coarse linear
//! approximation meant to give an idea of the appearance, not a
//! physiological model.
//
// Other approaches:
// http://vision.psychol.cam.ac.uk/jdmollon/papers/colourmaps.pdf
// https://www.mapbox.com/blog/colorblind-simulation/
// http://colororacle.org/

use std::fmt;
use rgb::RGB8;
use serde::Serialize;
use crate::convert::byte;

/// Forms of color blindness that can be simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Deficiency {
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

/// Row-major matrices.
const PROTANOPIA: [f64; 9] = [0.567, 0.433, 0.,
                              0.558, 0.442, 0.,
                              0.,    0.242, 0.758];
const DEUTERANOPIA: [f64; 9] = [0.625, 0.375, 0.,
                                0.7,   0.3,   0.,
                                0.,    0.3,   0.7];
const TRITANOPIA: [f64; 9] = [0.95, 0.05,  0.,
                              0.,   0.433, 0.567,
                              0.,   0.475, 0.525];
const ACHROMATOPSIA: [f64; 9] = [0.299, 0.587, 0.114,
                                 0.299, 0.587, 0.114,
                                 0.299, 0.587, 0.114];

impl Deficiency {
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        }
    }

    /// Short explanation of what the deficiency does to color vision.
    pub fn description(&self) -> &'static str {
        match self {
            Deficiency::Protanopia =>
                "Difficulty distinguishing between red and green",
            Deficiency::Deuteranopia =>
                "Difficulty distinguishing between green and red",
            Deficiency::Tritanopia =>
                "Difficulty distinguishing between blue and yellow",
            Deficiency::Achromatopsia =>
                "Complete color blindness, sees only shades of gray",
        }
    }

    #[inline]
    pub fn matrix(&self) -> &'static [f64; 9] {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
            Deficiency::Tritanopia => &TRITANOPIA,
            Deficiency::Achromatopsia => &ACHROMATOPSIA,
        }
    }

    /// How `c` would look like to someone with this deficiency.
    pub fn simulate(&self, c: RGB8) -> RGB8 {
        apply_matrix(self.matrix(), c)
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply the row-major matrix `m` to `c`.  Results are rounded and
/// clamped to \[0, 255\].
pub fn apply_matrix(m: &[f64; 9], c: RGB8) -> RGB8 {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    RGB8 { r: byte(m[0] * r + m[1] * g + m[2] * b),
           g: byte(m[3] * r + m[4] * g + m[5] * b),
           b: byte(m[6] * r + m[7] * g + m[8] * b) }
}

/// The result of simulating one deficiency on a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub kind: Deficiency,
    pub result_color: RGB8,
}

impl Simulation {
    pub fn new(kind: Deficiency, c: RGB8) -> Self {
        Simulation { kind, result_color: kind.simulate(c) }
    }
}

/// One simulation per deficiency, in the order of [`Deficiency::ALL`].
pub fn simulate_all(c: RGB8) -> Vec<Simulation> {
    Deficiency::ALL.iter().map(|&d| Simulation::new(d, c)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> RGB8 { RGB8 { r, g, b } }

    #[test]
    fn achromatopsia_is_gray() {
        for c in [rgb(0x33, 0x66, 0xcc), rgb(255, 0, 0), rgb(0, 255, 0),
                  rgb(0, 0, 255), rgb(12, 200, 99), rgb(255, 255, 255)] {
            let s = Deficiency::Achromatopsia.simulate(c);
            assert!(s.r == s.g && s.g == s.b, "{c:?} → {s:?}");
        }
        assert_eq!(Deficiency::Achromatopsia.simulate(rgb(255, 255, 255)),
                   rgb(255, 255, 255));
    }

    #[test]
    fn known_values() {
        let c = rgb(0x33, 0x66, 0xcc);
        assert_eq!(Deficiency::Protanopia.simulate(c), rgb(73, 74, 179));
        assert_eq!(Deficiency::Deuteranopia.simulate(c), rgb(70, 66, 173));
        assert_eq!(Deficiency::Tritanopia.simulate(c), rgb(54, 160, 156));
        assert_eq!(Deficiency::Achromatopsia.simulate(c), rgb(98, 98, 98));
    }

    #[test]
    fn neutral_colors_unchanged() {
        // Every matrix has rows summing to 1.
        for d in Deficiency::ALL {
            for v in [0, 77, 128, 255] {
                assert_eq!(d.simulate(rgb(v, v, v)), rgb(v, v, v), "{d}");
            }
        }
    }

    #[test]
    fn clamps() {
        let m = [2., 0., 0.,  -1., 0., 0.,  0., 0., 1.];
        assert_eq!(apply_matrix(&m, rgb(200, 10, 10)), rgb(255, 0, 10));
    }

    #[test]
    fn all_kinds() {
        let sims = simulate_all(rgb(1, 2, 3));
        let kinds: Vec<_> = sims.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, Deficiency::ALL);
    }
}
