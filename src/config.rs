// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the crop tool, persisted as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{
    CONFIG_DIR, CONFIG_FILE, HANDLE_TOLERANCE, INITIAL_SELECTION_FRACTION, MIN_SELECTION_SIZE,
};
use crate::domain::SelectorSettings;

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Half-size of the corner handle hit zone, in surface pixels.
    pub handle_tolerance: f32,
    /// Minimum selection side kept while resizing.
    pub min_selection_size: f32,
    /// Fraction of the image covered by the initial selection (0, 1].
    pub initial_fraction: f32,
    /// Grow tiny freshly drawn selections to the minimum size.
    pub expand_small_selection: bool,
    /// Draw the rule-of-thirds grid inside the selection.
    pub show_grid: bool,
    /// Optional directory cropped images are written to.
    pub default_output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            handle_tolerance: HANDLE_TOLERANCE,
            min_selection_size: MIN_SELECTION_SIZE,
            initial_fraction: INITIAL_SELECTION_FRACTION,
            expand_small_selection: true,
            show_grid: true,
            default_output_dir: dirs::picture_dir().or_else(dirs::home_dir),
        }
    }
}

impl AppConfig {
    /// Location of the user config file, if the platform has a config dir.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(path)
            .context("read failed")
            .and_then(|text| serde_json::from_str::<Self>(&text).context("parse failed"));

        match parsed {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Ignoring config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Replace out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.handle_tolerance) {
            self.handle_tolerance = HANDLE_TOLERANCE;
        }
        if !positive(self.min_selection_size) {
            self.min_selection_size = MIN_SELECTION_SIZE;
        }
        self.initial_fraction = if positive(self.initial_fraction) {
            self.initial_fraction.min(1.0)
        } else {
            INITIAL_SELECTION_FRACTION
        };
        self
    }

    pub fn selector_settings(&self) -> SelectorSettings {
        SelectorSettings {
            handle_tolerance: self.handle_tolerance,
            min_size: self.min_selection_size,
            initial_fraction: self.initial_fraction,
            expand_small_selection: self.expand_small_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            handle_tolerance: 6.0,
            min_selection_size: 32.0,
            show_grid: false,
            default_output_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "min_selection_size": 40.0 }"#).unwrap();
        let config = AppConfig::load_from(&path);
        assert_eq!(config.min_selection_size, 40.0);
        assert_eq!(config.handle_tolerance, HANDLE_TOLERANCE);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn sanitize_replaces_bad_values() {
        let config = AppConfig {
            handle_tolerance: -1.0,
            min_selection_size: f32::NAN,
            initial_fraction: 3.0,
            ..AppConfig::default()
        }
        .sanitized();
        assert_eq!(config.handle_tolerance, HANDLE_TOLERANCE);
        assert_eq!(config.min_selection_size, MIN_SELECTION_SIZE);
        assert_eq!(config.initial_fraction, 1.0);
    }

    #[test]
    fn settings_follow_config() {
        let config = AppConfig {
            expand_small_selection: false,
            ..AppConfig::default()
        };
        let settings = config.selector_settings();
        assert!(!settings.expand_small_selection);
        assert_eq!(settings.min_size, MIN_SELECTION_SIZE);
    }
}
