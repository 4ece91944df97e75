//! Minimal stderr backend for the `log` facade.
//!
//! Stdout carries the match protocol, so every log line goes to stderr,
//! prefixed with the process label (e.g. `[Joueur1]`).

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger {
    label: String,
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(
            stderr,
            "[{}] {:<5} {}",
            self.label,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Level used by the binaries: debug output only when asked for.
#[must_use]
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger. Fails if a logger is already set.
pub fn init(label: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger {
        label: label.to_string(),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let logger = StderrLogger {
            label: "test".to_string(),
            level: level_for(false),
        };
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));

        assert_eq!(level_for(true), LevelFilter::Debug);
    }
}
