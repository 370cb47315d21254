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
// A random password generator with strength rating, clipboard copy and file save.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pwgen::commands::{self, config, password_gen, shell, testpass};
use pwgen::configtool::{MAX_LENGTH, MIN_LENGTH, Settings, config_file_path};
use pwgen::error::PwgenError;
use pwgen::logging;

#[derive(Debug, Parser)]
#[command(name = "pwgen", version)]
#[command(about = "Generate random passwords and rate their strength", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new random password
    Gen(GenArgs),

    /// Rate the strength of a password
    Testpass(TestpassArgs),

    /// Start an interactive session
    Shell,

    /// Show or change default options
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password [default: from settings]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    length: Option<u16>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Save the password to the default save directory
    #[arg(short, long, default_value_t = false)]
    save: bool,

    /// Save the password to this file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the file if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Also show the zxcvbn estimate and suggestions
    #[arg(short, long, default_value_t = false)]
    feedback: bool,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Change one setting (length, uppercase, lowercase, digits, special, save_dir)
    Set { key: String, value: String },
    /// Restore the default settings
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            commands::report(&e);
            ExitCode::from(commands::exit_code(&e))
        }
        Err(e) => {
            tracing::error!("fatal: {:?}", e);
            eprintln!("Fatal error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Outer errors are fatal start-up failures; inner errors belong to the
/// single action that was requested, including a settings file that cannot
/// be read.
fn run(cli: Cli) -> anyhow::Result<Result<(), PwgenError>> {
    let settings_path = config_file_path().context("Failed to locate the settings directory")?;

    let outcome = match cli.command {
        Command::Gen(args) => Settings::load_from(&settings_path).and_then(|settings| {
            password_gen::generate_random(
                &settings,
                password_gen::GenRequest {
                    length: args.length.map(usize::from),
                    no_uppercase: args.no_uppercase,
                    no_lowercase: args.no_lowercase,
                    no_numbers: args.no_numbers,
                    no_special: args.no_special,
                    copy: args.copy,
                    save: args.save,
                    output: args.output,
                    force: args.force,
                },
            )
        }),
        Command::Testpass(args) => testpass::test_password(&args.password, args.feedback),
        Command::Shell => {
            Settings::load_from(&settings_path).and_then(|settings| shell::run_shell(&settings))
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                Settings::load_from(&settings_path).and_then(|settings| config::show_config(&settings))
            }
            ConfigAction::Set { key, value } => config::set_config(&key, &value),
            ConfigAction::Reset => config::reset_config(),
        },
    };
    Ok(outcome)
}
