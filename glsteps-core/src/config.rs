//! Run configuration.
//!
//! Defaults give an 800x600 fixed-size window titled "OpenGL" with a 3.2
//! core context. A JSON file can override any field; missing fields keep
//! their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GLSTEPS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlConfig {
    pub major: u8,
    pub minor: u8,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self { major: 3, minor: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gl: GlConfig,
    /// Directory holding `images/kitten.png` and `images/puppy.png`.
    pub resource_dir: PathBuf,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gl: GlConfig::default(),
            resource_dir: PathBuf::from("../resources"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON config.
    pub fn from_json(s: &str) -> Result<Self, String> {
        let config: Config = serde_json::from_str(s).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&text).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    /// Candidate config files in lookup order: the explicit path (from
    /// `$GLSTEPS_CONFIG`), then `glsteps/config.json` in the config directory.
    pub fn candidates(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Vec<PathBuf> {
        explicit
            .into_iter()
            .chain(config_dir.map(|dir| dir.join("glsteps").join("config.json")))
            .collect()
    }

    /// Loads the config from the first of [`Config::candidates`] that
    /// exists, falling back to the defaults. Problems are returned as
    /// warnings for the caller to log.
    pub fn load() -> (Self, Vec<String>) {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, dirs::config_dir())
    }

    /// [`Config::load`] with the lookup locations passed in.
    ///
    /// A missing explicit file is reported and the lookup moves on. A file
    /// that exists but fails to load is reported and the defaults are used.
    pub fn load_from(
        explicit: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        if let Some(path) = &explicit {
            if !path.exists() {
                warnings.push(format!(
                    "{} points at {}, which does not exist",
                    CONFIG_ENV,
                    path.display()
                ));
            }
        }

        let found = Self::candidates(explicit, config_dir)
            .into_iter()
            .find(|path| path.exists());
        let config = match found {
            Some(path) => Self::from_file(&path).unwrap_or_else(|e| {
                warnings.push(e);
                Self::default()
            }),
            None => Self::default(),
        };
        (config, warnings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.gl.major < 3 || (self.gl.major == 3 && self.gl.minor < 2) {
            return Err(format!(
                "GLSL 150 needs a 3.2 context or newer, got {}.{}",
                self.gl.major, self.gl.minor
            ));
        }
        Ok(())
    }

    /// Full path of an image under the resource directory.
    pub fn image_path(&self, file_name: &str) -> PathBuf {
        self.resource_dir.join("images").join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_fixed_window() {
        let config = Config::default();
        assert_eq!(config.window.title, "OpenGL");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!(!config.window.resizable);
        assert_eq!(config.gl, GlConfig { major: 3, minor: 2 });
        assert_eq!(
            config.image_path("kitten.png"),
            Path::new("../resources/images/kitten.png")
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "window": { "width": 1024 }, "log_level": "debug" }"#)
            .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.gl.major, 3);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_json(r#"{ "window": { "height": 0 } }"#).is_err());
        assert!(Config::from_json(r#"{ "gl": { "major": 2, "minor": 1 } }"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    /// A fresh directory under the system temp dir, removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("glsteps-config-{}-{}", name, std::process::id()));
            let _ = std::fs::remove_dir_all(&dir);
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, relative: &str, contents: &str) -> PathBuf {
            let path = self.0.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn explicit_path_comes_before_the_config_dir() {
        let paths = Config::candidates(
            Some(PathBuf::from("/tmp/mine.json")),
            Some(PathBuf::from("/home/me/.config")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tmp/mine.json"),
                PathBuf::from("/home/me/.config/glsteps/config.json"),
            ]
        );
        assert!(Config::candidates(None, None).is_empty());
    }

    #[test]
    fn existing_explicit_file_wins() {
        let scratch = Scratch::new("explicit");
        let explicit = scratch.write("mine.json", r#"{ "window": { "width": 640 } }"#);
        scratch.write("glsteps/config.json", r#"{ "window": { "width": 1234 } }"#);

        let (config, warnings) = Config::load_from(Some(explicit), Some(scratch.0.clone()));
        assert_eq!(config.window.width, 640);
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_explicit_file_falls_through_to_the_config_dir() {
        let scratch = Scratch::new("fallthrough");
        scratch.write("glsteps/config.json", r#"{ "window": { "width": 1234 } }"#);

        let (config, warnings) = Config::load_from(
            Some(scratch.0.join("nonexistent.json")),
            Some(scratch.0.clone()),
        );
        assert_eq!(config.window.width, 1234);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(CONFIG_ENV));
    }

    #[test]
    fn broken_file_reports_and_uses_defaults() {
        let scratch = Scratch::new("broken");
        scratch.write("glsteps/config.json", "{ window: ");

        let (config, warnings) = Config::load_from(None, Some(scratch.0.clone()));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Invalid config"));
    }

    #[test]
    fn nothing_to_find_gives_quiet_defaults() {
        let scratch = Scratch::new("empty");
        let (config, warnings) = Config::load_from(None, Some(scratch.0.clone()));
        assert_eq!(config, Config::default());
        assert!(warnings.is_empty());
    }
}
