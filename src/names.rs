//! Human-readable names for colors.
//!
//! Names are advisory: two different colors may get the same name and
//! a name never identifies a color.

use crate::HexColor;

mod table;
use table::{NameEntry, CSS_COLORS};

/// Something able to suggest a name for a color.
pub trait ColorNamer {
    /// Return the name of `color`, or `None` if nothing fits.
    fn name(&self, color: &HexColor) -> Option<String>;
}

impl<F> ColorNamer for F
where F: Fn(&HexColor) -> Option<String> {
    #[inline]
    fn name(&self, color: &HexColor) -> Option<String> { self(color) }
}

/// Name `color` with `namer`, using the hex string when `namer` has
/// no answer.
pub fn name_or_hex(namer: &impl ColorNamer, color: &HexColor) -> String {
    namer.name(color).unwrap_or_else(|| color.to_string())
}

/// Names a color after the closest CSS named color (Euclidean distance
/// in RGB).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NearestName {
    max_distance: Option<f64>,
}

impl NearestName {
    /// Always returns the closest name.
    pub fn new() -> Self { NearestName { max_distance: None } }

    /// Only accept names whose color is at most at `d` from the color
    /// to name.
    pub fn with_max_distance(d: f64) -> Self {
        NearestName { max_distance: Some(d) }
    }

    fn nearest(color: &HexColor) -> Option<(&'static NameEntry, f64)> {
        let c = color.rgb();
        let dist2 = |e: &NameEntry| {
            let dr = e.rgb.r as i32 - c.r as i32;
            let dg = e.rgb.g as i32 - c.g as i32;
            let db = e.rgb.b as i32 - c.b as i32;
            dr * dr + dg * dg + db * db
        };
        // `min_by_key` keeps the first of equally close entries.
        CSS_COLORS.iter().min_by_key(|e| dist2(e))
            .map(|e| (e, (dist2(e) as f64).sqrt()))
    }
}

impl ColorNamer for NearestName {
    fn name(&self, color: &HexColor) -> Option<String> {
        let (entry, d) = Self::nearest(color)?;
        match self.max_distance {
            Some(max) if d > max => None,
            _ => Some(entry.name.to_string()),
        }
    }
}
