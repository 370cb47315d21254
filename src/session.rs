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
// Generator session state

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{PwgenError, Result};
use crate::passgen::{self, GenerationOptions, Password};
use crate::savefile;
use crate::setclip::ClipboardSink;
use crate::strength::{self, Strength};

/// What the user currently has selected and on screen.
///
/// Options are read afresh on every [`Session::generate`]; the password and
/// its rating live until the next successful generation or [`Session::clear`].
#[derive(Debug, Default)]
pub struct Session {
    options: GenerationOptions,
    current: Option<(Password, Strength)>,
}

impl Session {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GenerationOptions {
        &mut self.options
    }

    pub fn password(&self) -> Option<&Password> {
        self.current.as_ref().map(|(password, _)| password)
    }

    pub fn strength(&self) -> Option<Strength> {
        self.current.as_ref().map(|(_, strength)| *strength)
    }

    /// Status line for the strength indicator.
    pub fn strength_status(&self) -> String {
        match self.strength() {
            Some(strength) => format!("Password Strength: {}", strength.label),
            None => "Password Strength: Not Generated".to_string(),
        }
    }

    /// Replaces the current password with a fresh one and rates it.
    ///
    /// A refused request leaves the previous password untouched.
    pub fn generate(&mut self) -> Result<&Password> {
        let password = passgen::generate_password(&self.options)?;
        let strength = strength::score_password(password.as_str(), &self.options);
        let entry = self.current.insert((password, strength));
        Ok(&entry.0)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn copy_to<C: ClipboardSink + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        let password = self.password().ok_or(PwgenError::NothingToCopy)?;
        clipboard.set_text(password.as_str())
    }

    /// Saves the current password, stamped with the local time.
    ///
    /// See [`savefile::resolve_save_path`] for how `target` is interpreted.
    /// An existing file is kept unless `overwrite` is set.
    pub fn save(&self, target: Option<&Path>, save_dir: &Path, overwrite: bool) -> Result<PathBuf> {
        self.save_at(target, save_dir, &Local::now().naive_local(), overwrite)
    }

    pub fn save_at(
        &self,
        target: Option<&Path>,
        save_dir: &Path,
        now: &NaiveDateTime,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let password = self.password().ok_or(PwgenError::NothingToSave)?;
        let path = savefile::resolve_save_path(target, save_dir, now);
        savefile::write_password_file(&path, password.as_str(), now, overwrite)?;
        Ok(path)
    }
}
