// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Writes every record as one line on stderr so stdout stays free for
/// `--report` output.
struct ConsoleLogger;

/// Installs the console logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Maps a config string ("error", "warn", "info", "debug", "trace", "off")
/// onto a filter. Unknown names fall back to Info.
pub fn parse_level(name: &str) -> LevelFilter {
  name.trim().parse().unwrap_or(LevelFilter::Info)
}

fn marker(level: Level) -> &'static str {
  match level {
    Level::Error => "[error]",
    Level::Warn => "[warn] ",
    Level::Info => "",
    Level::Debug => "[debug]",
    Level::Trace => "[trace]",
  }
}

fn format_record(level: Level, message: &str) -> String {
  let tag = marker(level);
  if tag.is_empty() {
    message.to_string()
  } else {
    format!("{} {}", tag, message)
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_record(record.level(), &record.args().to_string());
      let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
