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
// Config Tools

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dirs::{config_dir, document_dir};
use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::error::{PwgenError, Result};
use crate::passgen::GenerationOptions;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults applied when a request does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub save_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            length: options.length,
            include_uppercase: options.include_uppercase,
            include_lowercase: options.include_lowercase,
            include_digits: options.include_digits,
            include_special: options.include_special,
            save_dir: None,
        }
    }
}

impl Settings {
    /// Loads the settings file, or defaults when there is none yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(|e| PwgenError::from_io(path, e))?;
        let settings: Self = serde_json::from_str(&data).map_err(|source| PwgenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).map_err(|source| PwgenError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PwgenError::from_io(parent, e))?;
        }
        fs::write(path, data).map_err(|e| PwgenError::from_io(path, e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_length(self.length)?;
        Ok(())
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_digits: self.include_digits,
            include_special: self.include_special,
        }
    }

    /// Directory that receives password files saved without an explicit path.
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .or_else(document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "length" => self.length = parse_length(value)?,
            "save_dir" => {
                self.save_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value.trim()))
                }
            }
            other => {
                let class: CharacterClass = other.parse().map_err(|_| {
                    PwgenError::InvalidInput(format!(
                        "Unknown setting '{}'. Valid keys: length, uppercase, lowercase, digits, special, save_dir",
                        other
                    ))
                })?;
                let enabled = parse_bool(value)?;
                match class {
                    CharacterClass::Upper => self.include_uppercase = enabled,
                    CharacterClass::Lower => self.include_lowercase = enabled,
                    CharacterClass::Digit => self.include_digits = enabled,
                    CharacterClass::Special => self.include_special = enabled,
                }
            }
        }
        Ok(())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf> {
    match config_dir() {
        Some(path) => Ok(path.join("pwgen")),
        None => Err(PwgenError::ConfigDir),
    }
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn validate_length(length: usize) -> Result<usize> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PwgenError::InvalidInput(format!(
            "Password length must be between {} and {}",
            MIN_LENGTH, MAX_LENGTH
        )));
    }
    Ok(length)
}

pub fn parse_length(value: &str) -> Result<usize> {
    let length = value
        .trim()
        .parse::<usize>()
        .map_err(|_| PwgenError::InvalidInput(format!("Invalid password length: {}", value.trim())))?;
    validate_length(length)
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "false" | "off" | "0" => Ok(false),
        other => Err(PwgenError::InvalidInput(format!(
            "Expected yes or no, got '{}'",
            other
        ))),
    }
}

/// 提示用户输入，输入流结束时返回 `None`
pub fn prompt_input(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| PwgenError::from_io("<stdout>", e))?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| PwgenError::from_io("<stdin>", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_enforces_range() {
        assert_eq!(parse_length(" 16 ").unwrap(), 16);
        assert!(parse_length("0").is_err());
        assert!(parse_length("129").is_err());
        assert!(parse_length("sixteen").is_err());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("Yes").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn unserializable_settings_are_a_write_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = std::env::temp_dir().join("pwgen-config-write-test");
        let path = dir.join(CONFIG_FILE_NAME);
        let settings = Settings {
            save_dir: Some(PathBuf::from(OsStr::from_bytes(b"/tmp/\xff"))),
            ..Settings::default()
        };

        let err = settings.save_to(&path).unwrap_err();
        assert!(matches!(err, PwgenError::ConfigWrite { .. }));
        assert!(err.to_string().starts_with("Failed to write settings file"));
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
