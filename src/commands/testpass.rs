use crate::error::PwgenError;
use crate::strength;

pub fn test_password(password: &str, show_feedback: bool) -> Result<(), PwgenError> {
    if password.is_empty() {
        return Err(PwgenError::InvalidInput("Password to test cannot be empty".to_string()));
    }

    let strength = strength::assess_password(password);
    println!("Password Strength: {}", strength);

    if show_feedback {
        let estimate = strength::estimate_password(password);
        println!("zxcvbn estimate: {} ({}/4)", estimate.rating, estimate.score);
        if !estimate.feedback.is_empty() {
            println!("Suggestions: {}", estimate.feedback);
        }
    }
    Ok(())
}
