//! Log bridge for the practice-desk binary.
//!
//! Routes every `log::info!()` etc. to stderr as timestamped lines so that
//! session output on stdout stays clean. The level comes from the CLI
//! `--log-level` flag, then `PRACTICE_DESK_LOG`, then the config file.

use parking_lot::Mutex;
use practice_desk_config::LogLevel;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable consulted when no `--log-level` is given
pub const LOG_LEVEL_ENV_VAR: &str = "PRACTICE_DESK_LOG";

struct BridgeLogger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for BridgeLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        let mut sink = self.sink.lock();
        // Logging must never take the process down
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

/// Level named by `PRACTICE_DESK_LOG`, if set and valid
pub fn level_from_env() -> Option<LogLevel> {
    let raw = std::env::var(LOG_LEVEL_ENV_VAR).ok()?;
    match raw.parse::<LogLevel>() {
        Ok(level) => Some(level),
        Err(e) => {
            eprintln!("practice-desk: ignoring {LOG_LEVEL_ENV_VAR}: {e}");
            None
        }
    }
}

/// Install the stderr logger.
///
/// `level` (from the CLI) wins over the environment; with neither, `Info`
/// is used until [`set_level`] applies the config file's choice. Calling
/// this twice only updates the level.
pub fn init_log_bridge(level: Option<LogLevel>) {
    let level = level.or_else(level_from_env).unwrap_or_default();
    let logger = LOGGER.get_or_init(|| BridgeLogger {
        sink: Mutex::new(Box::new(io::stderr())),
    });
    if log::set_logger(logger).is_err() {
        log::debug!("Logger already installed, updating level only");
    }
    set_level(level);
}

/// Change the active log level
pub fn set_level(level: LogLevel) {
    log::set_max_level(level.to_level_filter());
}
