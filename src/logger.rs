use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

/// Environment variable holding the maximum level to print.
pub const ENV_VAR: &str = "LIFTSCAN_LOG";

static LOGGER: Logger = Logger;

/// Install the stderr logger when `LIFTSCAN_LOG` names a level.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init() -> Result<(), SetLoggerError> {
    let Some(filter) = std::env::var(ENV_VAR).ok().as_deref().and_then(level_filter) else {
        return Ok(());
    };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(filter))
}

fn level_filter(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            let _ = writeln!(std::io::stderr().lock(), "{tag} {}: {}", record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
