//! Configuration loading from `~/.campus/config.toml`.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use campus_types::ui::{IslandConfig, UiOptions};
use campus_types::{AnimationStep, SizePreset};

const DEFAULT_COURSE_ID: &str = "flutter-masterclass";

#[derive(Debug, Default, Deserialize)]
pub struct CampusConfig {
    pub app: Option<AppSection>,
    pub island: Option<IslandSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppSection {
    /// Course to open at startup.
    pub course: Option<String>,
    /// Use ASCII-only glyphs for icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the island morph ramp and other motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct IslandSection {
    /// Size preset the island starts at.
    pub initial_size: Option<SizePreset>,
    /// Transition sequence to run at startup.
    #[serde(default)]
    pub initial_animation: Vec<AnimationStep>,
}

impl CampusConfig {
    /// Config file location: `$CAMPUS_CONFIG` if set, else
    /// `~/.campus/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("CAMPUS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".campus").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults; a file
    /// that exists but can't be read or parsed is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn course_id(&self) -> &str {
        self.app
            .as_ref()
            .and_then(|app| app.course.as_deref())
            .unwrap_or(DEFAULT_COURSE_ID)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map_or_else(UiOptions::default, |app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
    }

    #[must_use]
    pub fn island_config(&self) -> IslandConfig {
        self.island
            .as_ref()
            .map_or_else(IslandConfig::default, |island| IslandConfig {
                initial_size: island.initial_size.unwrap_or_default(),
                initial_animation: island.initial_animation.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_sections_absent() {
        let config = CampusConfig::default();
        assert_eq!(config.course_id(), "flutter-masterclass");
        assert!(!config.ui_options().reduced_motion);
        assert_eq!(config.island_config().initial_size, SizePreset::Default);
        assert!(config.island_config().initial_animation.is_empty());
    }

    #[test]
    fn parses_island_section() {
        let file = write_config(
            r#"
[app]
reduced_motion = true

[island]
initial_size = "compact"

[[island.initial_animation]]
size = "large"
delay_ms = 150

[[island.initial_animation]]
size = "default"
"#,
        );
        let config = CampusConfig::load_from(file.path()).unwrap();
        assert!(config.ui_options().reduced_motion);

        let island = config.island_config();
        assert_eq!(island.initial_size, SizePreset::Compact);
        assert_eq!(
            island.initial_animation,
            vec![
                AnimationStep::new(SizePreset::Large, 150),
                AnimationStep::immediate(SizePreset::Default),
            ]
        );
    }

    #[test]
    fn malformed_config_reports_the_path() {
        let file = write_config("[island\ninitial_size = ");
        let err = CampusConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), file.path());
    }
}
