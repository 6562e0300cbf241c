//! Tests for configuration sourced from the process environment.
//!
//! These mutate `STAGE_*` variables, so every test holds `ENV_LOCK` and clears the variables
//! before returning.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use stage_safety::config::{load_config_with_env, AxisRange, LIMIT_ENV_VARS};
use stage_safety::error::{ConfigError, Error};
use stage_safety::{limits_from_env, Axis};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const STAGE_CONFIG: &str = r#"
[limits.x]
min_mm = 0.0
max_mm = 100.0

[limits.y]
min_mm = 0.0
max_mm = 100.0

[limits.z]
min_mm = 0.0
max_mm = 25.0

[presets.slide_center]
x = 50.0
y = 25.0
"#;

fn clear_stage_vars() {
    for (_, min_var, max_var) in LIMIT_ENV_VARS {
        std::env::remove_var(min_var);
        std::env::remove_var(max_var);
    }
}

fn write_config(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "stage-safety-{}-{}.toml",
        name,
        std::process::id()
    ));
    fs::write(&path, STAGE_CONFIG).expect("Should write temp config");
    path
}

#[test]
fn limits_from_process_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_stage_vars();

    for (name, value) in [
        ("STAGE_X_MIN", "0"),
        ("STAGE_X_MAX", "120"),
        ("STAGE_Y_MIN", "0"),
        ("STAGE_Y_MAX", "80"),
        ("STAGE_Z_MIN", "0"),
        ("STAGE_Z_MAX", "25"),
    ] {
        std::env::set_var(name, value);
    }

    let limits = limits_from_env().expect("All six variables are set");
    assert_eq!(limits.x, AxisRange::new(0.0, 120.0));
    assert_eq!(limits.y, AxisRange::new(0.0, 80.0));

    std::env::remove_var("STAGE_Z_MAX");
    assert_eq!(
        limits_from_env(),
        Err(Error::Config(ConfigError::MissingEnvVar("STAGE_Z_MAX")))
    );

    clear_stage_vars();
}

#[test]
fn env_override_validated_against_presets() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_stage_vars();
    let path = write_config("override-invalidates");

    // slide_center.x = 50 no longer fits once X is capped at 40.
    std::env::set_var("STAGE_X_MAX", "40");
    let result = load_config_with_env(&path);

    clear_stage_vars();
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::PresetOutOfRange { preset, axis, value, max, .. })) => {
            assert_eq!(preset.as_str(), "slide_center");
            assert_eq!(axis, Axis::X);
            assert_eq!(value, 50.0);
            assert_eq!(max, 40.0);
        }
        other => panic!("expected preset rejection, got {:?}", other),
    }
}

#[test]
fn env_override_applied_on_top_of_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_stage_vars();
    let path = write_config("override-applied");

    std::env::set_var("STAGE_Z_MAX", "30");
    let result = load_config_with_env(&path);

    clear_stage_vars();
    let _ = fs::remove_file(&path);

    let config = result.expect("Override keeps config valid");
    assert_eq!(config.limits.z, AxisRange::new(0.0, 30.0));
    assert_eq!(config.limits.x, AxisRange::new(0.0, 100.0));
    assert!(config.preset("slide_center").is_some());
}
