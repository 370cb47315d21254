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
// Random password generator with strength rating

pub mod charset;
pub mod commands;
pub mod configtool;
pub mod error;
pub mod logging;
pub mod passgen;
pub mod savefile;
pub mod session;
pub mod setclip;
pub mod strength;

pub use charset::CharacterClass;
pub use error::{PwgenError, Severity};
pub use passgen::{GenerationOptions, Password, Refusal, generate_password, generate_password_with};
pub use session::Session;
pub use strength::{Strength, StrengthLabel, score_password};
