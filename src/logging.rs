//! Logging setup.
//!
//! Library code logs through `tracing`. At plugin initialization a
//! subscriber is installed that forwards each formatted event to the
//! SuperBLT log stream when the host has provided its log import, and to
//! stderr otherwise (tests, non-Windows builds). `RUST_LOG` overrides the
//! default `info` filter.

use std::io;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::host::ffi;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // The host log stream stamps its own timestamps.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .with_writer(HostMakeWriter)
            .try_init();
    });
}

struct HostMakeWriter;

struct HostWriter {
    level: i32,
}

impl io::Write for HostWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let message = String::from_utf8_lossy(buf);
        ffi::host_log(self.level, message.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for HostMakeWriter {
    type Writer = HostWriter;

    fn make_writer(&'a self) -> Self::Writer {
        HostWriter {
            level: ffi::LOG_LEVEL_LOG,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        let level = match *meta.level() {
            Level::ERROR => ffi::LOG_LEVEL_ERROR,
            Level::WARN => ffi::LOG_LEVEL_WARN,
            _ => ffi::LOG_LEVEL_LOG,
        };
        HostWriter { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialized twice without panicking");
    }
}
