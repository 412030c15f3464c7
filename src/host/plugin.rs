//! SuperBLT plugin entry points.
//!
//! The host calls `Plugin_Init` once after its own setup, `Plugin_Update`
//! every frame, and `Plugin_PushLua` whenever a script requests this
//! module's table. The process-wide controller instance lives here and only
//! here; the library itself carries no globals.

#![allow(non_snake_case)]

use std::os::raw::c_int;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::core::config::PluginConfig;
use crate::host::ffi::{self, lua_State};
use crate::logging;
use crate::os::{PlatformWindowSystem, WindowSystem};
use crate::window::enforcer::StyleEnforcer;
use crate::window::{DisplayMode, ModeRequest, WindowController};

/// Optional config file, relative to the game directory.
const CONFIG_PATH: &str = "mods/borderless_windowed.json";

static CONTROLLER: OnceLock<WindowController> = OnceLock::new();
static ENFORCER: Mutex<Option<StyleEnforcer>> = Mutex::new(None);

/// Called once when the DLL is loaded, after SuperBLT is set up.
#[no_mangle]
pub extern "C" fn Plugin_Init() {
    logging::init();
    tracing::info!("Initializing Borderless Windowed");

    let config = PluginConfig::load_or_default(Path::new(CONFIG_PATH));
    let system: Arc<dyn WindowSystem> = Arc::new(PlatformWindowSystem::new());
    let controller = WindowController::new(Arc::clone(&system), &config);

    if config.enforce_styles {
        if let Some(window) = controller.window() {
            *ENFORCER.lock() = Some(StyleEnforcer::start(system, window));
        }
    }

    if controller.has_window() {
        tracing::info!("Borderless Windowed loaded successfully");
    }

    if CONTROLLER.set(controller).is_err() {
        tracing::warn!("Plugin_Init called more than once");
    }
}

/// Called once per engine frame. Unused.
#[no_mangle]
pub extern "C" fn Plugin_Update() {}

/// Deprecated per-reload hook; superseded by `Plugin_PushLua`.
#[no_mangle]
pub extern "C" fn Plugin_Setup_Lua(_state: *mut lua_State) {}

/// Push this module's script table. Returns the number of pushed values.
///
/// # Safety
/// Called by the host with a live Lua state.
#[no_mangle]
pub unsafe extern "C" fn Plugin_PushLua(state: *mut lua_State) -> c_int {
    ffi::new_table(state);
    ffi::push_cfunction(state, change_display_mode);
    ffi::set_field(state, -2, c"change_display_mode");
    1
}

/// `change_display_mode(mode, width, height [, adapter])`
///
/// Never raises past the host's own argument checks and never returns
/// values; failures are visible only in the log.
///
/// # Safety
/// Called by the host with a live Lua state.
pub unsafe extern "C" fn change_display_mode(state: *mut lua_State) -> c_int {
    let Some(controller) = CONTROLLER.get() else {
        return 0;
    };

    // Required arguments; the host raises the Lua error for missing ones.
    let Some(mode_raw) = ffi::check_integer(state, 1) else {
        return 0;
    };
    let Some(width) = ffi::check_integer(state, 2) else {
        return 0;
    };
    let Some(height) = ffi::check_integer(state, 3) else {
        return 0;
    };

    let adapter = if ffi::top(state) >= 4 {
        ffi::check_integer(state, 4).unwrap_or(0)
    } else {
        0
    };

    match DisplayMode::try_from(mode_raw as i64) {
        Ok(mode) => controller.request_mode(ModeRequest {
            mode,
            width: width as i32,
            height: height as i32,
            adapter: adapter_index(adapter),
        }),
        Err(e) => tracing::error!("{}", e),
    }

    0
}

/// A negative adapter argument is out of range, not an alias for the
/// primary; it must take the registry's virtual-desktop fallback.
fn adapter_index(raw: ffi::lua_Integer) -> usize {
    usize::try_from(raw).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::monitor::MonitorRegistry;
    use crate::os::stub::StubWindowSystem;
    use crate::os::MonitorInfo;

    #[test]
    fn test_negative_adapter_falls_back_to_desktop() {
        let system = Arc::new(StubWindowSystem::with_monitors(vec![
            MonitorInfo {
                handle: 1,
                rect: Rect::new(0, 0, 1920, 1080),
                is_primary: true,
                name: r"\\.\DISPLAY1".to_string(),
            },
            MonitorInfo {
                handle: 2,
                rect: Rect::new(1920, 0, 1280, 1024),
                is_primary: false,
                name: r"\\.\DISPLAY2".to_string(),
            },
        ]));
        let registry = MonitorRegistry::initialize(system);

        // Not clamped to the primary monitor
        assert_eq!(
            registry.resolve(adapter_index(-1)),
            Rect::new(0, 0, 3200, 1080)
        );
        assert_eq!(registry.resolve(adapter_index(0)), Rect::new(0, 0, 1920, 1080));
        assert_eq!(
            registry.resolve(adapter_index(1)),
            Rect::new(1920, 0, 1280, 1024)
        );
    }
}
