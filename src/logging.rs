#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes `LEVEL target: message` lines to stderr so stdout stays free for
/// the board and JSON output.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level named by `TICTACTOE_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`). Unset or unparsable
/// values fall back to `warn`. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_warn() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" INFO ")), LevelFilter::Info);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
        assert_eq!(parse_level(None), LevelFilter::Warn);
    }
}
