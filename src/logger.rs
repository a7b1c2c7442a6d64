use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub static STDERR_LOGGER: StderrLogger = StderrLogger;

/// Writes `LEVEL target > message` lines to stderr, leaving stdout to the
/// program being run.
pub struct StderrLogger;

impl Log for StderrLogger {
	fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			let mut stderr = std::io::stderr().lock();
			let _ = writeln!(stderr, "{:<5} {} > {}", label(record.level()), record.target(), record.args());
		}
	}

	fn flush(&self) { let _ = std::io::stderr().flush(); }
}

fn label(level: Level) -> &'static str {
	match level {
		Level::Error => "ERROR",
		Level::Warn => "WARN",
		Level::Info => "INFO",
		Level::Debug => "DEBUG",
		Level::Trace => "TRACE",
	}
}

/// Install the stderr logger. Can only succeed once per process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
	log::set_logger(&STDERR_LOGGER)?;
	log::set_max_level(level);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_labels() {
		assert_eq!(label(Level::Error), "ERROR");
		assert_eq!(label(Level::Trace), "TRACE");
	}

	#[test]
	fn enabled_follows_max_level() {
		log::set_max_level(LevelFilter::Info);
		let info = Metadata::builder().level(Level::Info).build();
		let debug = Metadata::builder().level(Level::Debug).build();
		assert!(STDERR_LOGGER.enabled(&info));
		assert!(!STDERR_LOGGER.enabled(&debug));
	}
}
