//! Configuration loading from files and the environment (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};
use crate::stage::Axis;

use super::{AxisLimits, AxisRange, StageConfig};

/// Environment variable names for each axis bound, as `(axis, min_var, max_var)`.
pub const LIMIT_ENV_VARS: [(Axis, &str, &str); 3] = [
    (Axis::X, "STAGE_X_MIN", "STAGE_X_MAX"),
    (Axis::Y, "STAGE_Y_MIN", "STAGE_Y_MAX"),
    (Axis::Z, "STAGE_Z_MIN", "STAGE_Z_MAX"),
];

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
///
/// # Example
///
/// ```rust,ignore
/// use stage_safety::load_config;
///
/// let config = load_config("stage.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StageConfig> {
    let content = read_config_file(path.as_ref())?;

    parse_config(&content)
}

/// Load configuration from a TOML file, then apply any `STAGE_*` environment overrides.
///
/// Validation runs after the overrides so a bad override is caught before use.
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<StageConfig> {
    let content = read_config_file(path.as_ref())?;

    let mut config = parse_unvalidated(&content)?;
    apply_env_overrides(&mut config)?;
    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<StageConfig> {
    let config = parse_unvalidated(content)?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })
}

fn parse_unvalidated(content: &str) -> Result<StageConfig> {
    toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })
}

/// Build axis limits from the six `STAGE_*` environment variables.
///
/// # Errors
///
/// Returns an error if any variable is missing or not a number, or the resulting ranges are
/// invalid.
pub fn limits_from_env() -> Result<AxisLimits> {
    limits_from_lookup(|name| std::env::var(name).ok())
}

/// Build axis limits from a variable lookup function. All six variables are required.
pub fn limits_from_lookup<F>(lookup: F) -> Result<AxisLimits>
where
    F: Fn(&str) -> Option<String>,
{
    let mut limits = AxisLimits::new(
        AxisRange::new(0.0, 0.0),
        AxisRange::new(0.0, 0.0),
        AxisRange::new(0.0, 0.0),
    );

    for (axis, min_var, max_var) in LIMIT_ENV_VARS {
        let min = required(&lookup, min_var)?;
        let max = required(&lookup, max_var)?;
        *limits.range_mut(axis) = AxisRange::new(min, max);
    }

    super::validation::validate_limits(&limits)?;
    Ok(limits)
}

/// Override configured bounds with any `STAGE_*` environment variables that are set.
pub fn apply_env_overrides(config: &mut StageConfig) -> Result<()> {
    apply_overrides_from(config, |name| std::env::var(name).ok())
}

/// Override configured bounds with whichever variables the lookup function returns.
///
/// All-or-nothing: if any variable fails to parse, `config` is left untouched.
/// Does not validate; callers run [`validate_config`](super::validate_config) afterwards.
pub fn apply_overrides_from<F>(config: &mut StageConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let mut limits = config.limits;
    for (axis, min_var, max_var) in LIMIT_ENV_VARS {
        let range = limits.range_mut(axis);
        if let Some(min) = optional(&lookup, min_var)? {
            range.min.0 = min;
        }
        if let Some(max) = optional(&lookup, max_var)? {
            range.max.0 = max;
        }
    }
    config.limits = limits;
    Ok(())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name)?.ok_or(Error::Config(ConfigError::MissingEnvVar(name)))
}

fn optional<F>(lookup: &F, name: &'static str) -> Result<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    raw.trim().parse::<f64>().map(Some).map_err(|_| {
        let mut value = heapless::String::new();
        for c in raw.chars() {
            if value.push(c).is_err() {
                break;
            }
        }
        Error::Config(ConfigError::InvalidEnvVar { name, value })
    })
}
