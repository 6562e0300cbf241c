//! Stage configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::limits::AxisLimits;
use super::preset::StagePreset;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct StageConfig {
    /// Per-axis safety bounds.
    pub limits: AxisLimits,

    /// Named absolute positions.
    #[serde(default)]
    pub presets: FnvIndexMap<String<32>, StagePreset, 16>,
}

impl StageConfig {
    /// Create a configuration with the given limits and no presets.
    pub fn new(limits: AxisLimits) -> Self {
        Self {
            limits,
            presets: FnvIndexMap::new(),
        }
    }

    /// Get a preset by name.
    pub fn preset(&self, name: &str) -> Option<&StagePreset> {
        self.presets
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all preset names.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(|s| s.as_str())
    }
}
