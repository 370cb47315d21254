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
// Password file writer

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf, is_separator};

use chrono::NaiveDateTime;

use crate::error::{PwgenError, Result};

/// Timestamp format of the header line.
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp format used in suggested file names.
pub const FILENAME_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Suggested file name, e.g. `password_2025-07-02_09-05-07.txt`.
pub fn default_filename(now: &NaiveDateTime) -> String {
    format!("password_{}.txt", now.format(FILENAME_TIME_FORMAT))
}

/// File contents: a timestamped header line followed by the password.
pub fn render_password_file(password: &str, now: &NaiveDateTime) -> String {
    format!(
        "Generated Password ({}):\n{}",
        now.format(HEADER_TIME_FORMAT),
        password
    )
}

/// Picks the file to write.
///
/// No target means the suggested file name inside `save_dir`. A target that
/// is an existing directory, or ends in a path separator, gets the suggested
/// file name appended.
pub fn resolve_save_path(target: Option<&Path>, save_dir: &Path, now: &NaiveDateTime) -> PathBuf {
    match target {
        Some(path) if path.is_dir() || names_directory(path) => path.join(default_filename(now)),
        Some(path) => path.to_path_buf(),
        None => save_dir.join(default_filename(now)),
    }
}

fn names_directory(path: &Path) -> bool {
    path.to_string_lossy().ends_with(is_separator)
}

/// Writes `password` to `path`, creating missing parent directories.
///
/// An existing file is only replaced when `overwrite` is set; otherwise the
/// write fails with [`PwgenError::FileExists`] and the file is left as it was.
pub fn write_password_file(path: &Path, password: &str, now: &NaiveDateTime, overwrite: bool) -> Result<()> {
    if password.is_empty() {
        return Err(PwgenError::NothingToSave);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PwgenError::from_io(parent, e))?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path).map_err(|e| PwgenError::from_io(path, e))?;
    file.write_all(render_password_file(password, now).as_bytes())
        .map_err(|e| PwgenError::from_io(path, e))?;
    tracing::info!(path = %path.display(), "password written to file");
    Ok(())
}
