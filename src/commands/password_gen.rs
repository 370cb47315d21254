use std::path::PathBuf;

use crate::configtool::{Settings, validate_length};
use crate::error::PwgenError;
use crate::passgen::GenerationOptions;
use crate::session::Session;
use crate::setclip::copy_to_clipboard;

/// Overrides given on the command line for one `gen` run.
#[derive(Debug, Default)]
pub struct GenRequest {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    pub copy: bool,
    pub save: bool,
    pub output: Option<PathBuf>,
    pub force: bool,
}

/// Options for one run: the saved settings, with the command line flags
/// applied on top. The `no_*` flags can only switch a class off.
pub fn options_for(settings: &Settings, request: &GenRequest) -> Result<GenerationOptions, PwgenError> {
    let mut options = settings.generation_options();
    if let Some(length) = request.length {
        options.length = validate_length(length)?;
    }
    if request.no_uppercase {
        options.include_uppercase = false;
    }
    if request.no_lowercase {
        options.include_lowercase = false;
    }
    if request.no_numbers {
        options.include_digits = false;
    }
    if request.no_special {
        options.include_special = false;
    }
    Ok(options)
}

pub fn generate_random(settings: &Settings, request: GenRequest) -> Result<(), PwgenError> {
    let mut session = Session::new(options_for(settings, &request)?);
    let password = session.generate()?.clone();
    println!("Generated password: {}", password);
    if let Some(strength) = session.strength() {
        println!("Password Strength: {}", strength);
    }

    if request.copy {
        copy_to_clipboard(password.as_str())?;
        println!("Password copied to clipboard!");
    }

    if request.save || request.output.is_some() {
        let path = session.save(request.output.as_deref(), &settings.save_dir(), request.force)?;
        println!("Password saved to {}", path.display());
    }
    Ok(())
}
