//! Stderr backend for the `log` facade
//!
//! The library only emits records; the binary decides whether anyone hears them.
//! Verbosity maps `-v` counts to levels: 0 → off, 1 → info, 2 → debug, 3+ → trace.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger for the whole process. Fails if a logger is already set.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Off);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
