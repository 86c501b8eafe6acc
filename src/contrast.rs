//! Luminance, contrast ratio and WCAG grading.
//!
//! Two brightness measures live here on purpose.  [`relative_luminance`]
//! is the WCAG definition, used for every contrast grade.
//! [`brightness`] is the quick 299/587/114 weighted sum on gamma-encoded
//! channels, used only to pick a default text color in
//! [`best_contrasting_color`].  Near mid-gray they disagree: `#767676`
//! gets white text although black contrasts slightly better.

use rgb::RGB8;
use serde::Serialize;
use crate::HexColor;

/// Minimum ratio for WCAG AA, normal text.
pub const AA: f64 = 4.5;
/// Minimum ratio for WCAG AAA, normal text.
pub const AAA: f64 = 7.0;
/// Minimum ratio for WCAG AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for WCAG AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

#[inline]
fn linear(v: u8) -> f64 {
    let v = v as f64 / 255.;
    if v <= 0.03928 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

/// WCAG relative luminance of `c`, in \[0, 1\].
pub fn relative_luminance(c: RGB8) -> f64 {
    0.2126 * linear(c.r) + 0.7152 * linear(c.g) + 0.0722 * linear(c.b)
}

/// Contrast ratio between two colors, in \[1, 21\].  Symmetric.
pub fn contrast_ratio(a: RGB8, b: RGB8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Perceived brightness in \[0, 255\] (ITU-R BT.601 weights, no gamma
/// decoding).
#[inline]
pub fn brightness(c: RGB8) -> f64 {
    (c.r as f64 * 299. + c.g as f64 * 587. + c.b as f64 * 114.) / 1000.
}

/// White for dark colors (brightness ≤ 128), black otherwise.
pub fn best_contrasting_color(c: RGB8) -> HexColor {
    if brightness(c) <= 128. { HexColor::WHITE } else { HexColor::BLACK }
}

#[inline]
pub fn is_wcag_aa(a: RGB8, b: RGB8) -> bool { contrast_ratio(a, b) >= AA }

#[inline]
pub fn is_wcag_aaa(a: RGB8, b: RGB8) -> bool { contrast_ratio(a, b) >= AAA }

#[inline]
pub fn is_wcag_aa_large(a: RGB8, b: RGB8) -> bool {
    contrast_ratio(a, b) >= AA_LARGE
}

#[inline]
pub fn is_wcag_aaa_large(a: RGB8, b: RGB8) -> bool {
    contrast_ratio(a, b) >= AAA_LARGE
}

/// Contrast ratio of a pair of colors together with its WCAG grades.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastAssessment {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub meets_aa_large: bool,
    pub meets_aaa_large: bool,
}

impl ContrastAssessment {
    pub fn new(a: RGB8, b: RGB8) -> Self {
        Self::from_ratio(contrast_ratio(a, b))
    }

    fn from_ratio(ratio: f64) -> Self {
        ContrastAssessment {
            ratio,
            meets_aa: ratio >= AA,
            meets_aaa: ratio >= AAA,
            meets_aa_large: ratio >= AA_LARGE,
            meets_aaa_large: ratio >= AAA_LARGE,
        }
    }
}
