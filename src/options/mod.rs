//! Scene options with TOML preset support.
//!
//! Camera start poses and speeds, projection parameters, and keybindings
//! are consolidated here. Options serialize to/from TOML so a scene can be
//! set up from a preset file.

mod camera;
mod keybindings;
mod projection;

use std::path::Path;

pub use camera::{CameraOptions, FreeFlyOptions, OrbitOptions};
pub use keybindings::{KeyMap, KeybindingOptions};
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CamkitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[projection.perspective]`)
/// work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera start poses and control speeds.
    pub camera: CameraOptions,
    /// Projection parameters.
    pub projection: ProjectionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CamkitError> {
        toml::from_str(content)
            .map_err(|e| CamkitError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamkitError> {
        let content = std::fs::read_to_string(path).map_err(CamkitError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamkitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamkitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamkitError::Io)?;
        }
        std::fs::write(path, content).map_err(CamkitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
