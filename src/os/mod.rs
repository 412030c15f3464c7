//! OS integration layer.
//!
//! The [`WindowSystem`] trait is the seam between the mode-transition logic
//! and Win32. The real implementation lives in [`windows`]; everything above
//! it is exercised against the in-memory [`stub`] implementation, which is
//! also what non-Windows builds get.

#[cfg(target_os = "windows")]
pub mod windows;

pub mod stub;

#[cfg(target_os = "windows")]
pub use self::windows::WindowsWindowSystem as PlatformWindowSystem;

#[cfg(not(target_os = "windows"))]
pub use stub::StubWindowSystem as PlatformWindowSystem;

use crate::core::geometry::Rect;

/// Win32 style bits used by the transition logic, kept as plain values so
/// the logic and its tests build on every platform.
pub mod style {
    pub const WS_CAPTION: u32 = 0x00C0_0000;
    pub const WS_VISIBLE: u32 = 0x1000_0000;
    pub const WS_CLIPSIBLINGS: u32 = 0x0400_0000;
    pub const WS_CLIPCHILDREN: u32 = 0x0200_0000;
    pub const WS_SYSMENU: u32 = 0x0008_0000;
    pub const WS_MINIMIZEBOX: u32 = 0x0002_0000;
    pub const WS_POPUP: u32 = 0x8000_0000;

    pub const WS_EX_OVERLAPPEDWINDOW: u32 = 0x0000_0300;
    pub const WS_EX_TOPMOST: u32 = 0x0000_0008;
}

/// Opaque reference to a top-level window (an HWND on Windows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef(pub usize);

/// A window's style and extended style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowStyles {
    pub style: u32,
    pub ex_style: u32,
}

impl WindowStyles {
    pub fn new(style: u32, ex_style: u32) -> Self {
        Self { style, ex_style }
    }

    /// Whether the extended style carries the topmost bit
    pub fn is_topmost(&self) -> bool {
        self.ex_style & style::WS_EX_TOPMOST != 0
    }

    /// Whether the style carries caption decorations
    pub fn has_caption(&self) -> bool {
        self.style & style::WS_CAPTION == style::WS_CAPTION
    }
}

/// Information about one attached display monitor
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    /// Monitor handle (platform-specific)
    pub handle: usize,
    /// Monitor bounds in virtual-desktop coordinates
    pub rect: Rect,
    /// Whether this is the primary monitor
    pub is_primary: bool,
    /// Monitor device name
    pub name: String,
}

/// Platform window operations.
///
/// Style and position setters are best-effort and return `()`: a rejected
/// call leaves the window as it was, which the log already covers.
pub trait WindowSystem: Send + Sync {
    /// Locate a top-level window by class and title.
    fn find_window(&self, class: &str, title: &str) -> Option<WindowRef>;

    /// Read the window's current style and extended style.
    fn styles(&self, window: WindowRef) -> WindowStyles;

    /// Replace the window's style and extended style.
    fn set_styles(&self, window: WindowRef, styles: WindowStyles);

    /// Expand a client-area rectangle to the outer frame rectangle the given
    /// styles would produce. Falls back to the input on OS failure.
    fn adjust_frame(&self, client: Rect, styles: WindowStyles) -> Rect;

    /// Move and resize the window, forcing non-client frame recomputation.
    fn set_frame(&self, window: WindowRef, frame: Rect);

    /// Current client-area size of the window.
    fn client_size(&self, window: WindowRef) -> (i32, i32);

    /// Enumerate attached monitors in OS order.
    fn enumerate_monitors(&self) -> Vec<MonitorInfo>;

    /// Bounding rectangle of the full virtual desktop.
    fn desktop_rect(&self) -> Rect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_detection() {
        let styles = WindowStyles::new(style::WS_VISIBLE, style::WS_EX_TOPMOST);
        assert!(styles.is_topmost());
        assert!(!WindowStyles::default().is_topmost());
    }

    #[test]
    fn test_caption_detection() {
        let styles = WindowStyles::new(style::WS_CAPTION | style::WS_VISIBLE, 0);
        assert!(styles.has_caption());

        let borderless = WindowStyles::new(style::WS_POPUP | style::WS_VISIBLE, 0);
        assert!(!borderless.has_caption());
    }
}
