//! Monitor registry.
//!
//! Display adapters are enumerated once at plugin initialization and frozen;
//! the scripting layer addresses them by index. A stale or out-of-range index
//! degrades to the full virtual-desktop rectangle instead of failing, so a
//! mode change can never abort on a bad adapter argument.

use std::sync::Arc;

use crate::core::geometry::Rect;
use crate::os::{MonitorInfo, WindowSystem};

/// Ordered, immutable list of display monitors
pub struct MonitorRegistry {
    system: Arc<dyn WindowSystem>,
    monitors: Vec<MonitorInfo>,
}

impl MonitorRegistry {
    /// Enumerate monitors once. An empty result is valid: every index then
    /// resolves to the virtual desktop.
    pub fn initialize(system: Arc<dyn WindowSystem>) -> Self {
        let monitors = system.enumerate_monitors();
        tracing::debug!("Monitor registry populated with {} monitors", monitors.len());
        Self { system, monitors }
    }

    /// Resolve an adapter index to its monitor rectangle, falling back to
    /// the virtual desktop for any index outside the registry.
    pub fn resolve(&self, adapter_index: usize) -> Rect {
        match self.monitors.get(adapter_index) {
            Some(monitor) => monitor.rect,
            None => {
                tracing::debug!(
                    "Adapter index {} out of range ({} monitors), using virtual desktop",
                    adapter_index,
                    self.monitors.len()
                );
                self.system.desktop_rect()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::stub::StubWindowSystem;

    fn two_monitor_registry() -> MonitorRegistry {
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
        MonitorRegistry::initialize(system)
    }

    #[test]
    fn test_resolve_in_range() {
        let registry = two_monitor_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(0), Rect::new(0, 0, 1920, 1080));
        assert_eq!(registry.resolve(1), Rect::new(1920, 0, 1280, 1024));
    }

    #[test]
    fn test_resolve_out_of_range_falls_back_to_desktop() {
        let registry = two_monitor_registry();
        // Registry size 2, adapter 5: full desktop, not an error
        assert_eq!(registry.resolve(5), Rect::new(0, 0, 3200, 1080));
    }

    #[test]
    fn test_empty_registry_always_falls_back() {
        let system = Arc::new(StubWindowSystem::with_monitors(Vec::new()));
        let registry = MonitorRegistry::initialize(system);
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(0), Rect::new(0, 0, 1920, 1080));
    }
}
