//! Diagnostic logging to stderr through the `log` facade.

use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding a level name (`off`, `error` … `trace`).
pub const LOG_ENV: &str = "FOLLOW_SYMLINK_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[follow-symlink][{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the level: CLI flags first, then the environment, then `warn`.
/// `verbose` wins over `quiet`; an unparsable environment value is ignored.
#[must_use]
pub fn select_level(verbose: bool, quiet: bool, env_value: Option<&str>) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    if quiet {
        return LevelFilter::Error;
    }
    env_value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger. Calling it again only changes the level.
pub fn init(verbose: bool, quiet: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let level = select_level(verbose, quiet, env_value.as_deref());
    // Already installed (tests, or a second call): keep the existing logger.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
