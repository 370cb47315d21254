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
// Character classes

use std::fmt;
use std::str::FromStr;

use crate::error::PwgenError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order their alphabets are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Whether `c` belongs to this class's generation alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Whether `c` counts toward this class when rating a password.
    ///
    /// Letters are recognised by their Unicode case, so a typed-in password
    /// like `Äpfel` still earns the uppercase point. Digits are the decimal
    /// digits `0-9` only; fractions and numerals such as `½` or `Ⅷ` do not
    /// count. Special characters only count when they come from [`SPECIAL`].
    pub fn detects(self, c: char) -> bool {
        match self {
            CharacterClass::Upper => c.is_uppercase(),
            CharacterClass::Lower => c.is_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => SPECIAL.contains(c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CharacterClass::Upper => "Uppercase Letters (A-Z)",
            CharacterClass::Lower => "Lowercase Letters (a-z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Special => "Special Characters (!@#$%^&*)",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = PwgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "upper" | "uppercase" => Ok(CharacterClass::Upper),
            "l" | "lower" | "lowercase" => Ok(CharacterClass::Lower),
            "d" | "digit" | "digits" | "numbers" => Ok(CharacterClass::Digit),
            "s" | "special" | "specials" | "symbols" => Ok(CharacterClass::Special),
            other => Err(PwgenError::InvalidInput(format!(
                "Unknown character type '{}'. Use upper, lower, digits or special",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(!a.alphabet().chars().any(|c| b.contains(c)), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn special_alphabet_matches_symbol_set() {
        assert_eq!(SPECIAL.len(), 26);
        assert!(SPECIAL.is_ascii());
        assert!(!SPECIAL.chars().any(|c| c.is_alphanumeric()));
    }

    #[test]
    fn detects_unicode_letters() {
        assert!(CharacterClass::Upper.detects('Ä'));
        assert!(CharacterClass::Lower.detects('é'));
        assert!(!CharacterClass::Special.detects('~'));
    }

    #[test]
    fn digits_are_decimal_only() {
        assert!(CharacterClass::Digit.detects('7'));
        for c in ['½', 'Ⅷ', '²'] {
            assert!(!CharacterClass::Digit.detects(c), "{}", c);
        }
    }

    #[test]
    fn parses_class_names() {
        assert_eq!("Upper".parse::<CharacterClass>().unwrap(), CharacterClass::Upper);
        assert_eq!("digits".parse::<CharacterClass>().unwrap(), CharacterClass::Digit);
        assert_eq!(" s ".parse::<CharacterClass>().unwrap(), CharacterClass::Special);
        assert!("emoji".parse::<CharacterClass>().is_err());
    }
}
