//! # stage-safety
//!
//! Bounds validation and absolute move sequencing for motorized microscope stages.
//!
//! ## Features
//!
//! - **Safety gate**: Every target is checked against inclusive per-axis bounds before it
//!   reaches the motor controller. Out-of-range moves are refused, never clamped.
//! - **Absolute commands only**: Partial and relative requests are resolved against a freshly
//!   read position, so hardware only ever sees a complete absolute target.
//! - **Configuration-driven**: Bounds and named presets from TOML files or `STAGE_*`
//!   environment variables
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stage_safety::{MoveRequest, StageController};
//!
//! // Load bounds from TOML
//! let config = stage_safety::load_config("stage.toml")?;
//!
//! // Wrap the motor controller connection
//! let mut stage = StageController::from_config(transport, &config);
//!
//! // Focus up by 10 mm
//! stage.move_stage(&MoveRequest::relative().with_z(10.0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and environment configuration
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to later modules.
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod stage;
pub mod transport;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisLimits, AxisRange, StageConfig, StagePreset};
pub use error::{ConfigError, Error, OutOfRangeError, Result, TransportError};
pub use stage::{calculate_target_position, Axis, MoveRequest, Position, PositionValidator, StageController};
pub use transport::{MockStageTransport, StageTransport};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{limits_from_env, load_config, load_config_with_env, parse_config};

// Unit types
pub use config::units::Millimeters;
