// src/log.rs
//
// tracing setup. `RUST_LOG` wins over the built-in default filter.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{LOG_DEFAULT_FILTER, LOG_DIR, LOG_FILE};

pub enum Target {
    /// CLI: human-readable lines on stderr.
    Stderr,
    /// GUI: append to `.store/debug.log`.
    File,
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program or buffered file lines are lost.
/// Calling twice is harmless (the second install is ignored).
pub fn init(target: Target) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LOG_DEFAULT_FILTER));

    match target {
        Target::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .try_init();
            None
        }
        Target::File => {
            let appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init();
            Some(guard)
        }
    }
}
