#![cfg(feature = "std")]

use crate::config::LOG_ENV_VAR;
use log::{LevelFilter, Metadata, Record};
use std::env;

/// Writes `LEVEL [module] message` lines to stderr, keeping stdout free for
/// the board and for `sim` JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{:<5} [{}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Module name without the crate prefix: `othello::game` becomes `game`.
/// Binaries log under their own crate name, which is kept as is.
fn short_target(target: &str) -> &str {
    target.strip_prefix("othello::").unwrap_or(target)
}

/// Level from the raw `OTHELLO_LOG` value. Accepts the usual level names in
/// any case; anything else falls back to `info`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level taken from `OTHELLO_LOG`.
/// Calling it again is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
