use anyhow::{anyhow, Result};
use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

/// Diagnostics go to stderr so that stdout carries only the route output.
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        })
        .target(Target::Stderr)
        .try_init()
        .map_err(|e| anyhow!("logger init failed: {}", e))
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
