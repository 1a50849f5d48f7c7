//! Control options with TOML preset support.
//!
//! All tweakable control parameters live here. Options serialize to/from
//! TOML; partial files fill in defaults so a preset can override a single
//! field.

use serde::{Deserialize, Serialize};

use crate::error::OrbitViewError;

/// Camera control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Rotation sensitivity multiplier applied to the orbit angle.
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier. At `1.0` the grabbed point stays
    /// under the cursor (pan is anchored to the pivot plane).
    pub pan_speed: f32,
    /// Dolly sensitivity multiplier applied to scroll distance.
    pub dolly_speed: f32,
    /// Minimum camera-to-pivot distance treated as non-degenerate by
    /// orbit and pan.
    pub min_pivot_distance: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            pan_speed: 1.0,
            dolly_speed: 1.0,
            min_pivot_distance: 1e-3,
        }
    }
}

impl ControlOptions {
    /// Parse options from a TOML string. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitViewError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, OrbitViewError> {
        toml::from_str(text)
            .map_err(|e| OrbitViewError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a pretty TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitViewError::OptionsParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, OrbitViewError> {
        toml::to_string_pretty(self)
            .map_err(|e| OrbitViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitViewError::Io`] if the file cannot be read, or
    /// [`OrbitViewError::OptionsParse`] on malformed TOML.
    pub fn load(path: &std::path::Path) -> Result<Self, OrbitViewError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
