mod init;

pub use init::{init_cli_logging, init_logging, parse_rotation};

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::get_app_path;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "lost-found-daemon.log";

/// Folder (under the app folder) holding the log files.
pub const LOGS_FOLDER: &str = "logs";

/// Filter target for this crate's events.
const CRATE_TARGET: &str = "lost_found_daemon";

/// Global log file path, set once at startup.
static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();

/// Remember the log file path so error responses can point at it.
pub fn set_log_file_path(path: String) {
    if LOG_FILE_PATH.set(path).is_err() {
        tracing::debug!("Log file path already set");
    }
}

/// Log file path set at startup, or `""` when file logging is off.
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}

/// Default log directory (`~/.lost-found/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    get_app_path().join(LOGS_FOLDER)
}

pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

impl LogConfig {
    /// Full path of the active log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}
