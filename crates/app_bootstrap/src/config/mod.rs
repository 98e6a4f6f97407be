//! Configuration system

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use serde::{Deserialize, Serialize};

use crate::subsystem::ImageFormats;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Where the window is placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowPosition {
    /// Centered on the primary monitor
    #[default]
    Centered,
    /// Top-left corner at explicit screen coordinates
    At {
        /// Horizontal screen coordinate
        x: i32,
        /// Vertical screen coordinate
        y: i32,
    },
}

impl WindowPosition {
    /// Resolve to screen coordinates for a window of `size` on a display of
    /// `display` pixels.
    ///
    /// Returns `None` when centering is requested but no display size is known.
    pub fn resolve(self, size: (u32, u32), display: Option<(u32, u32)>) -> Option<(i32, i32)> {
        match self {
            Self::At { x, y } => Some((x, y)),
            Self::Centered => {
                display.map(|(width, height)| (centered_offset(width, size.0), centered_offset(height, size.1)))
            }
        }
    }
}

// Negative when the window is larger than the display.
fn centered_offset(display: u32, window: u32) -> i32 {
    let offset = (i64::from(display) - i64::from(window)) / 2;
    i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar label
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Screen placement
    pub position: WindowPosition,
    /// Show the window once created
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Startup Example".to_string(),
            width: 800,
            height: 600,
            position: WindowPosition::Centered,
            visible: true,
        }
    }
}

/// Startup sequence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// How long the window stays up, in milliseconds
    pub hold_ms: u64,
    /// Image codecs to initialize; PNG is always requested
    pub image_formats: ImageFormats,
    /// Font face loaded when the font subsystem starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Main window settings
    pub window: WindowConfig,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            hold_ms: 3000,
            image_formats: ImageFormats::PNG,
            font_path: None,
            window: WindowConfig::default(),
        }
    }
}

impl StartupConfig {
    /// Hold duration
    pub const fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Image codecs the sequencer requests
    pub fn requested_image_formats(&self) -> ImageFormats {
        self.image_formats | ImageFormats::PNG
    }
}

impl Config for StartupConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("app_bootstrap_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_default_matches_demo_values() {
        let config = StartupConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.position, WindowPosition::Centered);
        assert!(config.window.visible);
        assert_eq!(config.hold(), Duration::from_millis(3000));
        assert_eq!(config.image_formats, ImageFormats::PNG);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_png_always_requested() {
        let config = StartupConfig {
            image_formats: ImageFormats::empty(),
            ..StartupConfig::default()
        };
        assert_eq!(config.requested_image_formats(), ImageFormats::PNG);
    }

    #[test]
    fn test_centered_position() {
        let position = WindowPosition::Centered;
        assert_eq!(position.resolve((800, 600), Some((1920, 1080))), Some((560, 240)));
        assert_eq!(position.resolve((800, 600), Some((640, 480))), Some((-80, -60)));
        assert_eq!(position.resolve((800, 600), None), None);
    }

    #[test]
    fn test_explicit_position_ignores_display() {
        let position = WindowPosition::At { x: 10, y: -20 };
        assert_eq!(position.resolve((800, 600), None), Some((10, -20)));
        assert_eq!(position.resolve((800, 600), Some((1920, 1080))), Some((10, -20)));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let path = temp_path("startup.toml");
        let config = StartupConfig {
            hold_ms: 250,
            font_path: Some(PathBuf::from("assets/fonts/mono.ttf")),
            ..StartupConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = StartupConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_file_round_trip() {
        let path = temp_path("startup.ron");
        let mut config = StartupConfig::default();
        config.window.title = "Placed".to_string();
        config.window.position = WindowPosition::At { x: 32, y: 48 };

        config.save_to_file(&path).unwrap();
        let loaded = StartupConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "hold_ms = 10\n\n[window]\ntitle = \"Short\"\n").unwrap();
        let loaded = StartupConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.hold_ms, 10);
        assert_eq!(loaded.window.title, "Short");
        assert_eq!(loaded.window.width, 800);
        assert_eq!(loaded.image_formats, ImageFormats::PNG);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = StartupConfig::load_from_file("startup.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let result = StartupConfig::default().save_to_file("startup");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = StartupConfig::load_from_file(temp_path("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_path("broken.ron");
        std::fs::write(&path, "(window: ").unwrap();
        let result = StartupConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
