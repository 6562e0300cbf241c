//! Configuration module for stage-safety.
//!
//! Provides types for loading and validating stage bounds and named presets from TOML files or
//! environment variables (with `std` feature) or pre-parsed data.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod preset;
mod system;
pub mod units;
mod validation;

pub use limits::{AxisLimits, AxisRange, DESCRIBE_CAPACITY};
pub use preset::StagePreset;
pub use system::StageConfig;
pub use validation::{validate_config, validate_limits};

#[cfg(feature = "std")]
pub use loader::{
    apply_env_overrides, apply_overrides_from, limits_from_env, limits_from_lookup, load_config,
    load_config_with_env, parse_config, LIMIT_ENV_VARS,
};

// Re-export unit types at config level
pub use units::{Millimeters, UnitExt};
