//! From extracted pixels to named palettes, and from one selected color
//! to everything there is to know about it.
//!
//! The dominant colors of an image are computed elsewhere; this module
//! receives them as raw RGB samples.  The selected color is never
//! stored: it is passed to [`describe_color`] on each query.

use rgb::{RGB, RGB8};
use serde::{Deserialize, Serialize};
use crate::{
    contrast::{best_contrasting_color, ContrastAssessment},
    convert::{rgb_to_cmyk, rgb_to_hsl},
    names::{name_or_hex, ColorNamer, NearestName},
    scheme::{generate_all, Scheme},
    vision::{simulate_all, Simulation},
    Cmyk, HexColor, Hsl, PaletteConfig, Result,
};

/// A palette color with a name suitable for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub color: HexColor,
    pub name: String,
}

/// Everything derived from one color.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDescription {
    pub hex: HexColor,
    pub rgb: RGB8,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
    /// One scheme per kind, in the order of `SchemeKind::ALL`.
    pub schemes: Vec<Scheme>,
    /// Black or white, whichever reads better on this color.
    pub contrasting: HexColor,
    /// Contrast between the color and `contrasting`.
    pub contrast: ContrastAssessment,
    /// One simulation per kind, in the order of `Deficiency::ALL`.
    pub simulations: Vec<Simulation>,
}

/// Describe `color`: conversions, schemes, contrast and simulations.
pub fn describe_color(color: &HexColor) -> ColorDescription {
    let rgb = color.rgb();
    let hsl = rgb_to_hsl(rgb);
    let contrasting = best_contrasting_color(rgb);
    log::debug!("describing {color} ({hsl})");
    ColorDescription {
        hex: *color,
        rgb,
        hsl,
        cmyk: rgb_to_cmyk(rgb),
        schemes: generate_all(hsl),
        contrasting,
        contrast: ContrastAssessment::new(rgb, contrasting.rgb()),
        simulations: simulate_all(rgb),
    }
}

/// Same as [`describe_color`] for a color given as a hex string.
pub fn describe_hex(hex: &str) -> Result<ColorDescription> {
    Ok(describe_color(&HexColor::parse(hex)?))
}

#[inline]
fn channel(v: i32) -> u8 { v.clamp(0, 255) as u8 }

/// Name every color of `colors`, keeping their order and duplicates.
pub fn extract_palette(colors: &[RGB8], namer: &impl ColorNamer)
                       -> Vec<NamedColor> {
    colors.iter().map(|&c| {
        let color = HexColor::from(c);
        NamedColor { name: name_or_hex(namer, &color), color }
    }).collect()
}

/// Turns raw extraction results into palettes, following a
/// [`PaletteConfig`].
#[derive(Clone, Debug)]
pub struct Explorer<N = NearestName> {
    config: PaletteConfig,
    namer: N,
}

impl Explorer<NearestName> {
    /// An explorer naming colors after the CSS named colors.  Fails if
    /// `config` does not pass [`PaletteConfig::validate`].
    pub fn new(config: PaletteConfig) -> Result<Self> {
        config.validate()?;
        let namer = match config.name_max_distance {
            Some(d) => NearestName::with_max_distance(d),
            None => NearestName::new(),
        };
        Ok(Explorer { config, namer })
    }
}

impl Default for Explorer<NearestName> {
    fn default() -> Self {
        Explorer { config: PaletteConfig::default(), namer: NearestName::new() }
    }
}

impl<N: ColorNamer> Explorer<N> {
    /// An explorer using a custom namer.  `config.name_max_distance`
    /// is checked but not used.
    pub fn with_namer(config: PaletteConfig, namer: N) -> Result<Self> {
        config.validate()?;
        Ok(Explorer { config, namer })
    }

    #[inline]
    pub fn config(&self) -> &PaletteConfig { &self.config }

    /// Name the dominant colors of an image.
    ///
    /// Channels outside \[0, 255\] are clamped and only the first
    /// `max_colors` samples are kept.  Order and duplicates are
    /// preserved.
    pub fn extract_palette(&self, samples: &[RGB<i32>]) -> Vec<NamedColor> {
        let max = self.config.max_colors;
        if samples.len() > max {
            log::warn!("{} colors extracted, keeping the first {max}",
                       samples.len());
        }
        let colors: Vec<RGB8> = samples.iter().take(max).map(|s| {
            let c = RGB8 { r: channel(s.r), g: channel(s.g), b: channel(s.b) };
            if (c.r as i32, c.g as i32, c.b as i32) != (s.r, s.g, s.b) {
                log::warn!("sample ({}, {}, {}) out of range, clamped to {}",
                           s.r, s.g, s.b, HexColor::from(c));
            }
            c
        }).collect();
        let palette = extract_palette(&colors, &self.namer);
        log::debug!("palette of {} colors", palette.len());
        palette
    }
}
