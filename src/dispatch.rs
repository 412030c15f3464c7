//! Fire-and-forget task dispatch.
//!
//! Mode transitions run off the scripting thread so a Lua call never waits
//! on window-manager latency. A single worker serializes transitions; no
//! result ever travels back to the caller. `shutdown` drains whatever is
//! queued and joins the worker, which keeps tests deterministic.

use std::sync::mpsc;
use std::thread;

use parking_lot::Mutex;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Background worker for window transitions
pub struct Dispatcher {
    sender: Mutex<Option<mpsc::Sender<Job>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();

        let worker = thread::Builder::new()
            .name("blt-window-worker".to_string())
            .spawn(move || {
                // Runs until the sender side is dropped; pending jobs are
                // drained before exit.
                while let Ok(job) = receiver.recv() {
                    job();
                }
            })
            .ok();

        if worker.is_none() {
            tracing::error!("Failed to spawn transition worker; mode changes will be dropped");
        }

        Self {
            sender: Mutex::new(worker.is_some().then_some(sender)),
            worker: Mutex::new(worker),
        }
    }

    /// Submit a job. Returns immediately; the job's outcome is never
    /// reported back. Submission after shutdown is a logged no-op.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self.sender.lock();
        match sender.as_ref() {
            Some(tx) => {
                if tx.send(Box::new(job)).is_err() {
                    tracing::warn!("Transition worker is gone; dropping request");
                }
            }
            None => tracing::warn!("Dispatcher is shut down; dropping request"),
        }
    }

    /// Close the queue, run anything still pending, and join the worker.
    pub fn shutdown(&self) {
        self.sender.lock().take();
        if let Some(handle) = self.worker.lock().take() {
            let _ = handle.join();
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_submitted_jobs_run_before_shutdown_returns() {
        let counter = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new();

        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            dispatcher.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        dispatcher.shutdown();
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_jobs_run_in_submission_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::new();

        for i in 0..5 {
            let order = Arc::clone(&order);
            dispatcher.submit(move || order.lock().push(i));
        }

        dispatcher.shutdown();
        assert_eq!(*order.lock(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_submit_after_shutdown_is_dropped() {
        let counter = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new();
        dispatcher.shutdown();

        let c = Arc::clone(&counter);
        dispatcher.submit(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shutdown_twice_is_harmless() {
        let dispatcher = Dispatcher::new();
        dispatcher.shutdown();
        dispatcher.shutdown();
    }
}
