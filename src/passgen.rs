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
// Password generator

use std::fmt;

use rand::rngs::OsRng;
use rand::seq::index;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::CharacterClass;

/// Character types and length of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.include_uppercase,
            CharacterClass::Lower => self.include_lowercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Special => self.include_special,
        }
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Upper => self.include_uppercase = enabled,
            CharacterClass::Lower => self.include_lowercase = enabled,
            CharacterClass::Digit => self.include_digits = enabled,
            CharacterClass::Special => self.include_special = enabled,
        }
    }

    /// Flips one class and returns its new state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.includes(class);
        self.set_class(class, enabled);
        enabled
    }

    /// Enabled classes in alphabet concatenation order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn validate(&self) -> Result<(), Refusal> {
        if self.enabled_classes().is_empty() {
            return Err(Refusal::NoClassSelected);
        }
        if self.length == 0 {
            return Err(Refusal::ZeroLength);
        }
        Ok(())
    }
}

/// Why a generation request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("Please select at least one character type")]
    NoClassSelected,
    #[error("Password length must be at least 1")]
    ZeroLength,
}

/// A generated password.
///
/// `Debug` never prints the secret itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.char_count())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a password with the operating system's CSPRNG for character
/// values and the thread-local generator for guarantee slot positions.
pub fn generate_password(options: &GenerationOptions) -> Result<Password, Refusal> {
    generate_password_with(options, &mut OsRng, &mut rand::thread_rng())
}

/// Generates a password from two explicit random sources.
///
/// Every character value comes from `secure`. After the initial draw, each
/// enabled class overwrites one slot picked by `slot_rng` with a character from
/// its own alphabet. When `length` is at least the number of enabled classes
/// the slots are distinct, so every class is present. Shorter passwords pick
/// slots independently and later classes may overwrite earlier ones.
pub fn generate_password_with<S, I>(
    options: &GenerationOptions,
    secure: &mut S,
    slot_rng: &mut I,
) -> Result<Password, Refusal>
where
    S: RngCore + CryptoRng + ?Sized,
    I: RngCore + ?Sized,
{
    options.validate()?;

    let classes = options.enabled_classes();
    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().bytes())
        .collect();

    let mut password_chars: Vec<char> = (0..options.length)
        .map(|_| draw(pool.as_slice(), secure))
        .collect();

    let slots: Vec<usize> = if options.length >= classes.len() {
        index::sample(slot_rng, options.length, classes.len()).into_vec()
    } else {
        classes.iter().map(|_| slot_rng.gen_range(0..options.length)).collect()
    };
    for (class, slot) in classes.iter().zip(slots) {
        password_chars[slot] = draw(class.alphabet().as_bytes(), secure);
    }

    tracing::debug!(
        length = options.length,
        classes = classes.len(),
        "password generated"
    );

    Ok(Password(password_chars.into_iter().collect()))
}

// Alphabets are ASCII and never empty.
fn draw<R: RngCore + CryptoRng + ?Sized>(alphabet: &[u8], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}
