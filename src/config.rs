//! Settings of the palette [`Explorer`](crate::Explorer).
//!
//! ```
//! use shadex::PaletteConfig;
//!
//! let config = PaletteConfig::from_json(r#"{ "max_colors": 8 }"#)?;
//! assert_eq!(config.max_colors, 8);
//! assert_eq!(config.name_max_distance, None);
//! # Ok::<(), shadex::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};
use crate::{ColorError, Result};

/// Number of dominant colors requested from the image by default.
pub const DEFAULT_MAX_COLORS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Maximum number of colors kept from an extracted palette (≥ 1).
    pub max_colors: usize,

    /// Maximum RGB distance between a color and the named color it is
    /// called after.  `None` always uses the closest name; colors
    /// further away are named by their hex code.
    pub name_max_distance: Option<f64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig { max_colors: DEFAULT_MAX_COLORS,
                        name_max_distance: None }
    }
}

impl PaletteConfig {
    /// Read a configuration from JSON.  Missing fields take their
    /// default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PaletteConfig = serde_json::from_str(json)
            .map_err(|source| ColorError::Config {
                message: "cannot decode palette configuration".to_string(),
                source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_colors == 0 {
            return Err(ColorError::invalid_parameter("max_colors", 0));
        }
        if let Some(d) = self.name_max_distance {
            if !(d >= 0.) {
                return Err(ColorError::invalid_parameter("name_max_distance", d));
            }
        }
        Ok(())
    }
}
