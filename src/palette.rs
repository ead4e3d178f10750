use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The persisted shape colors for a sandbox session.
///
/// Saved/loaded as JSON so a tint-cycled palette survives restarts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Palette {
    pub circle: Color,
    pub rectangle: Color,
}

impl Palette {
    /// Save palette to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load palette from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            circle: Color::WHITE,
            rectangle: Color::rgb(0, 139, 57),
        }
    }
}
