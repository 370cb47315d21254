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
// Password strength rating

use std::fmt;

use zxcvbn::{Score, zxcvbn};

use crate::charset::CharacterClass;
use crate::passgen::GenerationOptions;

pub const MAX_SCORE: u8 = 6;

/// Qualitative rating shown next to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 5 => StrengthLabel::VeryStrong,
            4 => StrengthLabel::Strong,
            3 => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {}/{})", self.label, self.score, MAX_SCORE)
    }
}

/// Rates `password` against the classes that were requested for it.
///
/// Length earns up to two points (8 or more characters: one, 12 or more:
/// two). Each requested class earns one more point if the password really
/// contains a character of that class.
pub fn score_password(password: &str, options: &GenerationOptions) -> Strength {
    let length = password.chars().count();
    let mut score = match length {
        n if n >= 12 => 2,
        n if n >= 8 => 1,
        _ => 0,
    };

    for class in CharacterClass::ALL {
        if options.includes(class) && password.chars().any(|c| class.detects(c)) {
            score += 1;
        }
    }

    Strength {
        score,
        label: StrengthLabel::from_score(score),
    }
}

/// Rates a password typed in by the user, as if every class had been requested.
pub fn assess_password(password: &str) -> Strength {
    let options = GenerationOptions {
        length: password.chars().count(),
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
        include_special: true,
    };
    score_password(password, &options)
}

/// zxcvbn's opinion of a password, shown alongside the fixed rating.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub rating: &'static str,
    pub score: u8,
    pub feedback: String,
}

pub fn estimate_password(password: &str) -> Estimate {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(String::new, |f| {
        f.suggestions()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    });

    let (rating, score) = match score {
        Score::Zero => ("Very Weak", 0),
        Score::One => ("Weak", 1),
        Score::Two => ("Fair", 2),
        Score::Three => ("Strong", 3),
        Score::Four => ("Very Strong", 4),
        _ => ("Unknown", 0),
    };

    Estimate {
        rating,
        score,
        feedback,
    }
}
