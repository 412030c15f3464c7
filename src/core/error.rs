//! Error types for the plugin.
//!
//! Nothing here ever crosses the Lua boundary; the FFI layer logs and
//! swallows. The taxonomy exists so library code can propagate with `?`.

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Main error type for the plugin
#[derive(Error, Debug)]
pub enum PluginError {
    /// The game window could not be located at initialization. Fatal for the
    /// process run: the controller stays inert afterwards.
    #[error("Game window not found (class: {class}, title: {title})")]
    WindowNotFound { class: String, title: String },

    /// A scripting caller passed a mode value outside {0, 1, 2}.
    #[error("Invalid display mode: {value}")]
    InvalidMode { value: i64 },

    #[error("Config load failed: {reason}")]
    ConfigLoad { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_not_found_display() {
        let err = PluginError::WindowNotFound {
            class: "diesel win32".to_string(),
            title: "PAYDAY 2".to_string(),
        };
        assert!(err.to_string().contains("diesel win32"));
        assert!(err.to_string().contains("PAYDAY 2"));
    }

    #[test]
    fn test_invalid_mode_display() {
        let err = PluginError::InvalidMode { value: 7 };
        assert!(err.to_string().contains('7'));
    }
}
