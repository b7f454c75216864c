use std::io::{self, Write};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs the stderr logger; `verbosity` counts `-v` flags.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for(verbosity)))
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (tag, color) = match record.level() {
            Level::Error => ("error", "31"),
            Level::Warn => ("warn", "33"),
            Level::Info => ("info", "36"),
            Level::Debug => ("debug", "2"),
            Level::Trace => ("trace", "2"),
        };

        let mut stderr = io::stderr().lock();
        let _ = if crate::io::stderr_is_tty() {
            writeln!(stderr, "  \x1b[{color}m{tag:>5}\x1b[0m {}", record.args())
        } else {
            writeln!(stderr, "{tag:>5} {}", record.args())
        };
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_an_error() {
        let _ = init(0);
        assert!(init(1).is_err());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
