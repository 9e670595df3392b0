//! Diagnostic logging for runs.
//!
//! Log output goes to stderr so it never interleaves with the report on
//! stdout.

use std::panic;

use tracing::{debug, Level};

use crate::failure;

/// Maps `-v` occurrences to a level: warnings by default, then info, debug,
/// trace.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Turns panics caught by the failure boundary into debug events. Failing
/// cases are expected to panic, and their messages already end up in the
/// report. Panics anywhere else still reach the previously installed hook.
pub fn quiet_panics() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !failure::inside_boundary() {
            previous(info);
            return;
        }
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        debug!(%location, "callback panicked: {}", message);
    }));
}
