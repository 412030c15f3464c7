//! In-memory window system.
//!
//! Backs non-Windows builds and all controller tests: it simulates a single
//! game window plus a configurable monitor layout, records every style and
//! frame call, and applies fixed synthetic frame extents in `adjust_frame`
//! so placement math stays deterministic.

use parking_lot::Mutex;

use crate::core::geometry::Rect;
use crate::os::{style, MonitorInfo, WindowRef, WindowStyles, WindowSystem};

/// Synthetic frame metrics used by [`StubWindowSystem::adjust_frame`]
pub const STUB_BORDER: i32 = 8;
/// Synthetic caption height
pub const STUB_CAPTION: i32 = 23;

/// One recorded window operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOp {
    SetStyles(WindowStyles),
    SetFrame(Rect),
}

#[derive(Debug, Default)]
struct WindowState {
    styles: WindowStyles,
    frame: Rect,
    ops: Vec<WindowOp>,
}

/// Stub window system
pub struct StubWindowSystem {
    window_class: String,
    window_title: String,
    monitors: Vec<MonitorInfo>,
    desktop: Rect,
    state: Mutex<WindowState>,
}

impl StubWindowSystem {
    /// A stub with one 1920x1080 primary monitor and a matching window.
    pub fn new() -> Self {
        Self::with_monitors(vec![MonitorInfo {
            handle: 1,
            rect: Rect::new(0, 0, 1920, 1080),
            is_primary: true,
            name: r"\\.\DISPLAY1".to_string(),
        }])
    }

    /// A stub with the given monitor layout; the desktop rect is the union.
    pub fn with_monitors(monitors: Vec<MonitorInfo>) -> Self {
        let desktop = union_rect(&monitors).unwrap_or(Rect::new(0, 0, 1920, 1080));
        Self {
            window_class: "diesel win32".to_string(),
            window_title: "PAYDAY 2".to_string(),
            monitors,
            desktop,
            state: Mutex::new(WindowState::default()),
        }
    }

    /// A stub whose window lookup always fails.
    pub fn without_window() -> Self {
        let mut stub = Self::new();
        stub.window_title = String::new();
        stub
    }

    /// Recorded operations, in call order.
    pub fn ops(&self) -> Vec<WindowOp> {
        self.state.lock().ops.clone()
    }

    /// Current simulated frame.
    pub fn frame(&self) -> Rect {
        self.state.lock().frame
    }

    /// Seed the simulated window's styles and frame, e.g. to model the
    /// engine having set the window up before the plugin runs.
    pub fn seed_window(&self, styles: WindowStyles, frame: Rect) {
        let mut state = self.state.lock();
        state.styles = styles;
        state.frame = frame;
    }
}

impl Default for StubWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSystem for StubWindowSystem {
    fn find_window(&self, class: &str, title: &str) -> Option<WindowRef> {
        if class == self.window_class && title == self.window_title {
            Some(WindowRef(0x5157))
        } else {
            None
        }
    }

    fn styles(&self, _window: WindowRef) -> WindowStyles {
        self.state.lock().styles
    }

    fn set_styles(&self, _window: WindowRef, styles: WindowStyles) {
        let mut state = self.state.lock();
        state.styles = styles;
        state.ops.push(WindowOp::SetStyles(styles));
    }

    fn adjust_frame(&self, client: Rect, styles: WindowStyles) -> Rect {
        if styles.style & style::WS_CAPTION == style::WS_CAPTION {
            Rect {
                x: client.x - STUB_BORDER,
                y: client.y - STUB_BORDER - STUB_CAPTION,
                width: client.width + 2 * STUB_BORDER,
                height: client.height + 2 * STUB_BORDER + STUB_CAPTION,
            }
        } else {
            client
        }
    }

    fn set_frame(&self, _window: WindowRef, frame: Rect) {
        let mut state = self.state.lock();
        state.frame = frame;
        state.ops.push(WindowOp::SetFrame(frame));
    }

    fn client_size(&self, _window: WindowRef) -> (i32, i32) {
        let state = self.state.lock();
        let frame = state.frame;
        if state.styles.has_caption() {
            (
                frame.width - 2 * STUB_BORDER,
                frame.height - 2 * STUB_BORDER - STUB_CAPTION,
            )
        } else {
            (frame.width, frame.height)
        }
    }

    fn enumerate_monitors(&self) -> Vec<MonitorInfo> {
        self.monitors.clone()
    }

    fn desktop_rect(&self) -> Rect {
        self.desktop
    }
}

fn union_rect(monitors: &[MonitorInfo]) -> Option<Rect> {
    let first = monitors.first()?.rect;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.right();
    let mut max_y = first.bottom();

    for monitor in &monitors[1..] {
        min_x = min_x.min(monitor.rect.x);
        min_y = min_y.min(monitor.rect.y);
        max_x = max_x.max(monitor.rect.right());
        max_y = max_y.max(monitor.rect.bottom());
    }

    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
