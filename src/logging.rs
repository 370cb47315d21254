//  ____  __        __  ____  _____  _   _
// |  _ \ \ \      / / / ___|| ____|| \ | |
// | |_) | \ \ /\ / / | |  _ |  _|  |  \| |
// |  __/   \ V  V /  | |_| || |___ | |\  |
// |_|       \_/\_/    \____||_____||_| \_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-17
// Version : 0.1.0
// License : Mulan PSL v2
//
// Error log

//! Unexpected failures and panics are appended to `error_log.txt` in the
//! local data directory. The log is best effort: when it cannot be opened
//! the program runs on without it.

use std::backtrace::Backtrace;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::PwgenError;

pub const ERROR_LOG_PREFIX: &str = "error_log";
pub const ERROR_LOG_SUFFIX: &str = "txt";
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Directory holding the error log.
pub fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|path| path.join("pwgen"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn error_log_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.{}", ERROR_LOG_PREFIX, ERROR_LOG_SUFFIX))
}

/// Installs the file logger and the panic hook.
///
/// Returns the log file path when logging is active. Level defaults to
/// `warn` and can be changed with `RUST_LOG`.
pub fn init_logging() -> Option<PathBuf> {
    let log_dir = get_log_dir();
    match try_init(&log_dir) {
        Ok(()) => {
            install_panic_hook();
            Some(error_log_path(&log_dir))
        }
        Err(e) => {
            eprintln!("Warning: error log disabled: {}", e);
            None
        }
    }
}

fn try_init(log_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(file_subscriber(log_dir)?)?;
    Ok(())
}

/// Builds the subscriber that appends to `error_log.txt` inside `log_dir`,
/// creating the directory first.
pub fn file_subscriber(
    log_dir: &Path,
) -> Result<impl tracing::Subscriber + Send + Sync + use<>, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir).map_err(|e| PwgenError::from_io(log_dir, e))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(ERROR_LOG_PREFIX)
        .filename_suffix(ERROR_LOG_SUFFIX)
        .build(log_dir)?;

    Ok(fmt()
        .with_writer(file_appender)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_ansi(false)
        .with_target(true)
        .finish())
}

/// Records panics with a backtrace before the default hook reports them.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::force_capture();
        tracing::error!(target: "pwgen::panic", "{}\n{}", info, backtrace);
        default_hook(info);
    }));
}

/// Appends a failed action to the error log, with its cause chain.
pub fn log_error(error: &(dyn std::error::Error + 'static)) {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    tracing::error!("{}", chain);
}
