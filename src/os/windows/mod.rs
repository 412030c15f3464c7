//! Windows implementation of the window system.

mod monitor;
mod window;

pub use window::WindowsWindowSystem;
