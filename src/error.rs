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
// Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::passgen::Refusal;

/// How a failed action is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user asked for something that cannot be done with the current
    /// input. Nothing was changed.
    Warning,
    /// The environment (clipboard, file system, settings) failed.
    Error,
}

#[derive(Debug, Error)]
pub enum PwgenError {
    #[error(transparent)]
    Refused(#[from] Refusal),

    #[error("No password to copy!")]
    NothingToCopy,

    #[error("No password to save!")]
    NothingToSave,

    #[error("File already exists: {}", .path.display())]
    FileExists { path: PathBuf },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine configuration directory")]
    ConfigDir,

    #[error("Failed to parse settings file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write settings file {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PwgenError>;

impl PwgenError {
    pub fn severity(&self) -> Severity {
        match self {
            PwgenError::Refused(_)
            | PwgenError::NothingToCopy
            | PwgenError::NothingToSave
            | PwgenError::FileExists { .. }
            | PwgenError::InvalidInput(_) => Severity::Warning,
            PwgenError::Clipboard(_)
            | PwgenError::PermissionDenied { .. }
            | PwgenError::Io { .. }
            | PwgenError::ConfigDir
            | PwgenError::ConfigParse { .. }
            | PwgenError::ConfigWrite { .. } => Severity::Error,
        }
    }

    /// Short heading naming the action that failed.
    pub fn title(&self) -> &'static str {
        match self {
            PwgenError::Refused(_) => "Selection Error",
            PwgenError::NothingToCopy => "Copy Error",
            PwgenError::NothingToSave | PwgenError::FileExists { .. } => "Save Error",
            PwgenError::InvalidInput(_) => "Input Error",
            PwgenError::Clipboard(_) => "Clipboard Error",
            PwgenError::PermissionDenied { .. } | PwgenError::Io { .. } => "Save Error",
            PwgenError::ConfigDir | PwgenError::ConfigParse { .. } | PwgenError::ConfigWrite { .. } => {
                "Settings Error"
            }
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            PwgenError::PermissionDenied { path } => format!(
                "Permission denied writing {}. Try a different location or check file permissions.",
                path.display()
            ),
            PwgenError::FileExists { path } => format!(
                "{} already exists. Choose another name or overwrite it.",
                path.display()
            ),
            PwgenError::Io { source, .. } => format!("Failed to save password: {}", source),
            _ => self.to_string(),
        }
    }

    /// Maps a file system failure on `path`, keeping permission problems and
    /// refused overwrites apart from other I/O errors.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => PwgenError::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => PwgenError::FileExists { path },
            _ => PwgenError::Io { path, source },
        }
    }
}
