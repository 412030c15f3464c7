//! Borderless Windowed — a SuperBLT native plugin for PAYDAY 2.
//!
//! Registers a `change_display_mode(mode, width, height [, adapter])`
//! function with the mod scripting layer that switches the game window
//! between decorated-windowed and fullscreen-borderless presentation,
//! with multi-monitor placement via an adapter index.
//!
//! The crate builds as a `cdylib` for the loader; the `rlib` target exists
//! so the transition logic can be tested against the in-memory window
//! system on any platform.

pub mod core;
pub mod dispatch;
pub mod host;
pub mod logging;
pub mod monitor;
pub mod os;
pub mod window;

// Re-export commonly used items
pub use crate::core::config::PluginConfig;
pub use crate::core::error::{PluginError, Result};
pub use crate::core::geometry::Rect;
pub use monitor::MonitorRegistry;
pub use os::{WindowRef, WindowStyles, WindowSystem};
pub use window::{DisplayMode, ModeRequest, WindowController};
