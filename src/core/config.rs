//! Plugin configuration.
//!
//! SuperBLT gives native plugins no configuration mechanism of their own, so
//! settings live in an optional JSON file next to the DLL. A missing or
//! malformed file falls back to the built-in defaults with a logged warning;
//! a bad config must never keep the plugin from loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PluginError, Result};

/// Delay before a fullscreen-borderless transition touches the window.
///
/// Empirically required to avoid racing the engine's own window setup during
/// startup; transitions issued without it can be reverted by the renderer.
pub const DEFAULT_FULLSCREEN_DELAY_MS: u64 = 100;

/// Main plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Game window lookup keys
    pub window: WindowConfig,

    /// Transition tuning
    pub transition: TransitionConfig,

    /// Run the style-enforcement loop instead of relying solely on explicit
    /// mode requests. Off by default; the two policies are alternatives, not
    /// layers.
    pub enforce_styles: bool,
}

/// Window lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Win32 window class of the game window
    pub class: String,

    /// Title of the game window
    pub title: String,
}

/// Transition tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Milliseconds to wait before applying fullscreen-borderless
    pub fullscreen_delay_ms: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            transition: TransitionConfig::default(),
            enforce_styles: false,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            class: "diesel win32".to_string(),
            title: "PAYDAY 2".to_string(),
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fullscreen_delay_ms: DEFAULT_FULLSCREEN_DELAY_MS,
        }
    }
}

impl PluginConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| PluginError::ConfigLoad {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// Load from `path` if it exists, falling back to defaults otherwise.
    /// Parse failures are logged and also fall back.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.window.class, "diesel win32");
        assert_eq!(config.window.title, "PAYDAY 2");
        assert_eq!(config.transition.fullscreen_delay_ms, 100);
        assert!(!config.enforce_styles);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("borderless.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"transition": {{"fullscreen_delay_ms": 250}}}}"#).unwrap();

        let config = PluginConfig::load(&path).unwrap();
        assert_eq!(config.transition.fullscreen_delay_ms, 250);
        // Unspecified sections keep their defaults
        assert_eq!(config.window.title, "PAYDAY 2");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PluginConfig::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(config.window.class, "diesel win32");
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let config = PluginConfig::load_or_default(&path);
        assert_eq!(config.transition.fullscreen_delay_ms, 100);
    }
}
