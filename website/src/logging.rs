//! Browser console logging
//!
//! Library crates log through `tracing`, which forwards to the `log` facade
//! when no subscriber is installed, so everything lands in the console.

use log::{Level, SetLoggerError};
use mrfast_app::config::{LogLevel, LoggingSettings};

pub fn init(settings: &LoggingSettings) -> Result<(), SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level(settings.level))?;
    log::info!("Mr Fast site starting (log level {})", settings.level);
    Ok(())
}

fn level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    }
}
