//! Window mode controller.
//!
//! Owns the resolved game window, the monitor registry and the transition
//! worker. A mode request validates on the calling thread and applies on the
//! worker, so the scripting layer never blocks on the window manager.

pub mod enforcer;

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::PluginConfig;
use crate::core::error::PluginError;
use crate::core::geometry::{self, Rect};
use crate::dispatch::Dispatcher;
use crate::monitor::MonitorRegistry;
use crate::os::{style, WindowRef, WindowStyles, WindowSystem};

/// Style composite for decorated windowed mode
pub const WINDOWED_STYLES: WindowStyles = WindowStyles {
    style: style::WS_CAPTION
        | style::WS_VISIBLE
        | style::WS_CLIPSIBLINGS
        | style::WS_CLIPCHILDREN
        | style::WS_SYSMENU
        | style::WS_MINIMIZEBOX,
    ex_style: style::WS_EX_OVERLAPPEDWINDOW,
};

/// Style composite for fullscreen-borderless mode
pub const BORDERLESS_STYLES: WindowStyles = WindowStyles {
    style: style::WS_POPUP | style::WS_VISIBLE | style::WS_CLIPSIBLINGS,
    ex_style: 0,
};

/// Requested presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Leave the window as it is
    Unchanged,
    /// Decorated, centered window of a requested client size
    Windowed,
    /// Undecorated window covering one monitor exactly
    FullscreenBorderless,
}

impl TryFrom<i64> for DisplayMode {
    type Error = PluginError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DisplayMode::Unchanged),
            1 => Ok(DisplayMode::Windowed),
            2 => Ok(DisplayMode::FullscreenBorderless),
            other => Err(PluginError::InvalidMode { value: other }),
        }
    }
}

/// One mode-change request from the scripting layer
#[derive(Debug, Clone, Copy)]
pub struct ModeRequest {
    pub mode: DisplayMode,
    pub width: i32,
    pub height: i32,
    pub adapter: usize,
}

/// Controller for the tracked game window
pub struct WindowController {
    system: Arc<dyn WindowSystem>,
    registry: Arc<MonitorRegistry>,
    dispatcher: Dispatcher,
    window: Option<WindowRef>,
    fullscreen_delay: Duration,
}

impl WindowController {
    /// Resolve the game window and populate the monitor registry. A failed
    /// window lookup is logged once and leaves the controller permanently
    /// inert; there is no retry.
    pub fn new(system: Arc<dyn WindowSystem>, config: &PluginConfig) -> Self {
        let window = system.find_window(&config.window.class, &config.window.title);
        match window {
            Some(w) => tracing::info!("Found game window: {:#x}", w.0),
            None => tracing::error!(
                "Failed to find the game window (class: {:?}, title: {:?}); \
                 display mode changes are disabled for this run",
                config.window.class,
                config.window.title
            ),
        }

        let registry = Arc::new(MonitorRegistry::initialize(Arc::clone(&system)));

        Self {
            system,
            registry,
            dispatcher: Dispatcher::new(),
            window,
            fullscreen_delay: Duration::from_millis(config.transition.fullscreen_delay_ms),
        }
    }

    /// Whether a window was resolved at construction.
    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// The tracked window, if lookup succeeded.
    pub fn window(&self) -> Option<WindowRef> {
        self.window
    }

    pub fn registry(&self) -> &MonitorRegistry {
        &self.registry
    }

    /// Dispatch a mode change and return immediately. The transition runs
    /// on the worker; its outcome is observable only through the window
    /// itself and the log.
    pub fn request_mode(&self, request: ModeRequest) {
        // Lookup failure was already logged as fatal at initialization.
        let Some(window) = self.window else {
            return;
        };

        let system = Arc::clone(&self.system);
        let registry = Arc::clone(&self.registry);
        let delay = self.fullscreen_delay;

        match request.mode {
            DisplayMode::Unchanged => {}
            DisplayMode::Windowed => {
                tracing::info!(
                    "Requested windowed mode {}x{} on adapter {}",
                    request.width,
                    request.height,
                    request.adapter
                );
                self.dispatcher.submit(move || {
                    let monitor = registry.resolve(request.adapter);
                    apply_windowed(&*system, window, monitor, request.width, request.height);
                });
            }
            DisplayMode::FullscreenBorderless => {
                tracing::info!(
                    "Requested fullscreen-borderless on adapter {}",
                    request.adapter
                );
                self.dispatcher.submit(move || {
                    // The engine may still be setting the window up shortly
                    // after startup; applying immediately can be reverted by
                    // its renderer. See TransitionConfig::fullscreen_delay_ms.
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                    let monitor = registry.resolve(request.adapter);
                    apply_fullscreen(&*system, window, monitor);
                });
            }
        }
    }

    /// Drain pending transitions and stop the worker.
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }
}

/// Apply decorated windowed mode: compute the decorated frame for the
/// requested client size, center it on the target monitor (origin clamped to
/// the monitor origin), then apply styles and frame together.
fn apply_windowed(
    system: &dyn WindowSystem,
    window: WindowRef,
    monitor: Rect,
    width: i32,
    height: i32,
) {
    let decorated = system.adjust_frame(Rect::of_size(width, height), WINDOWED_STYLES);
    let frame = geometry::center_within(decorated.width, decorated.height, monitor);

    system.set_styles(window, WINDOWED_STYLES);
    system.set_frame(window, frame);

    tracing::debug!(
        "Windowed: client {}x{} -> frame {:?}",
        width,
        height,
        frame
    );
}

/// Apply fullscreen-borderless: strip decorations and cover the monitor
/// rectangle exactly.
fn apply_fullscreen(system: &dyn WindowSystem, window: WindowRef, monitor: Rect) {
    system.set_styles(window, BORDERLESS_STYLES);
    system.set_frame(window, monitor);

    tracing::debug!("Fullscreen-borderless: frame {:?}", monitor);
}
