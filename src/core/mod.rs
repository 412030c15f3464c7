//! Core module: configuration, errors and geometry.

pub mod config;
pub mod error;
pub mod geometry;

pub use config::PluginConfig;
pub use error::{PluginError, Result};
pub use geometry::Rect;
