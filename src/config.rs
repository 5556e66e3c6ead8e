use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable pointing at a JSON config file.
pub const CONFIG_ENV: &str = "ARTICLE_LAYOUT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct Config {
    /// Directory holding the durable keys.
    pub data_dir: PathBuf,
    /// Key under which the whole template store is written.
    pub templates_key: String,
    /// Key under which the publish snapshot is written.
    pub publish_key: String,
    /// Where exported template files go.
    pub export_dir: PathBuf,
    pub seed_default_templates: bool,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("article_layout_data"),
            templates_key: "layout_templates".to_owned(),
            publish_key: "article_snapshot".to_owned(),
            export_dir: PathBuf::from("."),
            seed_default_templates: true,
            canvas_width: 750.0,
            canvas_height: 1200.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Load `path` if given, falling back to defaults on any problem.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("No config file given, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Resolve the config from [`CONFIG_ENV`], if set.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_or_default(path.as_deref())
    }

    /// Path an exported template named `name` is written to.
    ///
    /// Always a direct child of `export_dir`, whatever the name contains.
    pub fn export_path(&self, name: &str) -> PathBuf {
        self.export_dir.join(format!("{}.json", file_stem(name)))
    }
}

/// Turn a template name into a single path component.
fn file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // No hidden files and no `.`/`..` components
    let stem = replaced.trim().trim_start_matches('.');
    if stem.is_empty() {
        "template".to_owned()
    } else {
        stem.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"templates_key": "custom"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.templates_key, "custom");
        assert_eq!(config.publish_key, Config::default().publish_key);
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(Config::load_or_default(Some(&path)), Config::default());
    }

    #[test]
    fn test_export_path_stays_in_export_dir() {
        let config = Config {
            export_dir: PathBuf::from("exports"),
            ..Config::default()
        };

        for name in ["../../home/u/.bashrc", "..", "/etc/passwd", "a\\..\\b", "", ".hidden"] {
            let path = config.export_path(name);
            assert_eq!(path.parent(), Some(Path::new("exports")), "{name}");
            assert!(
                path.components()
                    .all(|c| matches!(c, std::path::Component::Normal(_))),
                "{name} -> {}",
                path.display()
            );
        }

        assert_eq!(config.export_path("Weekly picks"), Path::new("exports/Weekly picks.json"));
        assert_eq!(config.export_path(".."), Path::new("exports/template.json"));
        assert_eq!(
            config.export_path("../../home/u/.bashrc"),
            Path::new("exports/_.._home_u_.bashrc.json")
        );
    }

    #[test]
    fn test_missing_config_is_read_error() {
        let result = Config::load(Path::new("/nonexistent/article_layout.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
