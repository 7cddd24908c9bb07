use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "monster_tracker.toml";
const ENV_PREFIX: &str = "MONSTER_TRACKER__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub resizable: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Monster Tracker RPG".into(),
            window_width: 420.0,
            window_height: 420.0,
            resizable: false,
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then the config file, then `MONSTER_TRACKER__*` variables.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(path, Path::new(DEFAULT_CONFIG_FILE), |key| {
        std::env::var(key).ok()
    })
}

pub fn load_settings_with(
    path: Option<&Path>,
    default_path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None if default_path.exists() => read_settings_file(default_path)?,
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, lookup);
    Ok(settings)
}

/// Command-line flags are the last layer and only replace what was given.
pub fn apply_cli_overrides(
    settings: &mut Settings,
    title: Option<String>,
    log_filter: Option<String>,
) {
    if let Some(title) = title {
        settings.window_title = title;
    }
    if let Some(filter) = log_filter {
        settings.log_filter = filter;
    }
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = var("WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = var("WINDOW_WIDTH") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_width = parsed;
        }
    }
    if let Some(v) = var("WINDOW_HEIGHT") {
        if let Ok(parsed) = v.trim().parse::<f32>() {
            settings.window_height = parsed;
        }
    }
    if let Some(v) = var("RESIZABLE") {
        if let Ok(parsed) = v.trim().parse::<bool>() {
            settings.resizable = parsed;
        }
    }
    if let Some(v) = var("LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
