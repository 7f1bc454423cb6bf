use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::error::{Error, Result};

/// Installs a stderr logger with compact `LEVEL message` lines.
///
/// The library only emits through the `log` facade; binaries call this
/// once at startup.
pub fn init_logger(level: LevelFilter, timestamps: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamps {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    builder
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
