pub mod config;
pub mod password_gen;
pub mod shell;
pub mod testpass;

use crate::error::{PwgenError, Severity};
use crate::logging::log_error;

/// Shows a failed action to the user. Environment failures also go to the
/// error log.
pub fn report(error: &PwgenError) {
    match error.severity() {
        Severity::Warning => eprintln!("⚠️ {}: {}", error.title(), error.user_message()),
        Severity::Error => {
            log_error(error);
            eprintln!("❌ {}: {}", error.title(), error.user_message());
        }
    }
}

/// Process exit status for a failed action: 2 for warnings, 1 for errors.
pub fn exit_code(error: &PwgenError) -> u8 {
    match error.severity() {
        Severity::Warning => 2,
        Severity::Error => 1,
    }
}
