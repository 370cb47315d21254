use crate::configtool::{Settings, config_file_path};
use crate::error::PwgenError;

pub fn show_config(settings: &Settings) -> Result<(), PwgenError> {
    println!("Settings file: {}", config_file_path()?.display());
    println!("{:<12} | {}", "Key", "Value");
    println!("{}", "-".repeat(40));
    println!("{:<12} | {}", "length", settings.length);
    println!("{:<12} | {}", "uppercase", yes_no(settings.include_uppercase));
    println!("{:<12} | {}", "lowercase", yes_no(settings.include_lowercase));
    println!("{:<12} | {}", "digits", yes_no(settings.include_digits));
    println!("{:<12} | {}", "special", yes_no(settings.include_special));
    println!("{:<12} | {}", "save_dir", settings.save_dir().display());
    Ok(())
}

pub fn set_config(key: &str, value: &str) -> Result<(), PwgenError> {
    let mut settings = Settings::load()?;
    settings.set(key, value)?;
    let path = settings.save()?;
    println!("Updated '{}' in {}", key, path.display());
    Ok(())
}

pub fn reset_config() -> Result<(), PwgenError> {
    let path = Settings::default().save()?;
    println!("Settings reset to defaults in {}", path.display());
    Ok(())
}

fn yes_no(enabled: bool) -> &'static str {
    if enabled { "yes" } else { "no" }
}
