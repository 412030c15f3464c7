//! Self-correcting style enforcement.
//!
//! Alternative policy to one-shot requests: a background loop that keeps
//! re-inspecting the window and corrects any external agent (usually the
//! engine itself) that swaps its decorations back. Opt-in via the
//! `enforce_styles` config flag; never run together with explicit requests
//! as a combined policy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::os::{WindowRef, WindowSystem};

use super::{BORDERLESS_STYLES, WINDOWED_STYLES};

/// Observed presentation state of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observation {
    /// Topmost: some other process manages the window; leave it alone
    ExternallyManaged,
    /// Covers the desktop but still carries decorations
    NeedsStripping,
    /// Smaller than the desktop but missing decorations
    NeedsDecorating,
    /// Nothing to correct
    Settled,
}

/// Cancellable style-enforcement loop
pub struct StyleEnforcer {
    stop: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
}

impl StyleEnforcer {
    /// Spawn the enforcement loop. It runs until [`stop`](Self::stop) or
    /// drop, yielding the processor between iterations.
    pub fn start(system: Arc<dyn WindowSystem>, window: WindowRef) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let worker = thread::Builder::new()
            .name("blt-style-enforcer".to_string())
            .spawn(move || {
                tracing::info!("Style enforcement loop started");
                while !stop_flag.load(Ordering::Relaxed) {
                    Self::correct(&*system, window);
                    thread::yield_now();
                }
                tracing::info!("Style enforcement loop stopped");
            })
            .ok();

        if worker.is_none() {
            tracing::error!("Failed to spawn style enforcement loop");
        }

        Self { stop, worker }
    }

    fn observe(system: &dyn WindowSystem, window: WindowRef) -> Observation {
        let styles = system.styles(window);
        if styles.is_topmost() {
            return Observation::ExternallyManaged;
        }

        let (width, height) = system.client_size(window);
        let desktop = system.desktop_rect();

        if (width, height) == (desktop.width, desktop.height) {
            if styles.has_caption() {
                Observation::NeedsStripping
            } else {
                Observation::Settled
            }
        } else if width < desktop.width && height < desktop.height && !styles.has_caption() {
            Observation::NeedsDecorating
        } else {
            Observation::Settled
        }
    }

    fn correct(system: &dyn WindowSystem, window: WindowRef) {
        match Self::observe(system, window) {
            Observation::ExternallyManaged | Observation::Settled => {}
            Observation::NeedsStripping => {
                tracing::debug!("Window covers the desktop; stripping decorations");
                system.set_styles(window, BORDERLESS_STYLES);
            }
            Observation::NeedsDecorating => {
                tracing::debug!("Window is sub-desktop sized; reapplying decorations");
                system.set_styles(window, WINDOWED_STYLES);
            }
        }
    }

    /// Signal the loop to exit and join it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for StyleEnforcer {
    fn drop(&mut self) {
        self.stop();
    }
}
