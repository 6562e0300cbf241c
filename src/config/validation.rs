//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::stage::Axis;

use super::{AxisLimits, StageConfig, StagePreset};

/// Validate a stage configuration.
///
/// Checks:
/// - Every axis range is finite with min <= max
/// - Every preset sets at least one axis
/// - Every preset coordinate lies within its axis bounds
///
/// The first problem found is reported, axes in X, Y, Z order.
pub fn validate_config(config: &StageConfig) -> Result<()> {
    validate_limits(&config.limits)?;

    for (name, preset) in config.presets.iter() {
        validate_preset(name.as_str(), preset, &config.limits)?;
    }

    Ok(())
}

/// Validate axis bounds on their own, e.g. after loading them from the environment.
pub fn validate_limits(limits: &AxisLimits) -> Result<()> {
    if let Some((axis, range)) = limits.first_invalid() {
        return Err(Error::Config(ConfigError::InvalidLimits {
            axis,
            min: range.min.0,
            max: range.max.0,
        }));
    }
    Ok(())
}

fn validate_preset(name: &str, preset: &StagePreset, limits: &AxisLimits) -> Result<()> {
    let preset_name = heapless::String::try_from(name).unwrap_or_default();

    if preset.is_empty() {
        return Err(Error::Config(ConfigError::EmptyPreset(preset_name)));
    }

    for axis in Axis::ALL {
        let Some(value) = preset.get(axis) else {
            continue;
        };
        let range = limits.range(axis);
        if !range.contains(value) {
            return Err(Error::Config(ConfigError::PresetOutOfRange {
                preset: preset_name,
                axis,
                value,
                min: range.min.0,
                max: range.max.0,
            }));
        }
    }

    Ok(())
}
