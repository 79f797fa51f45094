use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::consts::PRESET_VERSION;
use crate::error::{Error, Result};
use crate::settings::{DEFAULT_TRAA_SETTINGS, PartialTraaSettings, TraaSettings};

/// Exported panel state. Fields missing from `settings` leave the current
/// value alone when imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub version: Version,
    #[serde(default)]
    pub settings: PartialTraaSettings,
}

impl Preset {
    pub fn new(settings: &TraaSettings) -> Self {
        Self {
            version: PRESET_VERSION,
            settings: (*settings).into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse and check a preset. Every supplied field must lie in its
    /// input's range, so a preset that loads can always be applied.
    pub fn from_json(json: &str) -> Result<Self> {
        let preset: Preset =
            serde_json::from_str(json).map_err(|e| Error::Deserialization(e.to_string()))?;

        if preset.version.major != PRESET_VERSION.major {
            return Err(Error::IncompatiblePreset {
                found: preset.version,
                expected: PRESET_VERSION,
            });
        }

        DEFAULT_TRAA_SETTINGS.merge(&preset.settings).validate()?;

        Ok(preset)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
