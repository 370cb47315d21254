use std::path::PathBuf;

use crate::charset::CharacterClass;
use crate::commands::report;
use crate::configtool::{Settings, parse_bool, parse_length, prompt_input};
use crate::error::{PwgenError, Result};
use crate::session::Session;
use crate::setclip::{ClipboardSink, SystemClipboard};

const HELP: &str = "\
Commands:
  g, generate        generate a new password
  c, copy            copy the password to the clipboard
  x, clear           clear the password
  s, save [PATH]     save the password to a file
  l, length N        set the password length
  t, toggle CLASS    turn upper, lower, digits or special on or off
  o, options         show the current options
  h, help            show this help
  q, quit            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Generate,
    Copy,
    Clear,
    Save {
        target: Option<PathBuf>,
        overwrite: bool,
    },
    Length(usize),
    Toggle(CharacterClass),
    Options,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "g" | "generate" => ShellCommand::Generate,
        "c" | "copy" => ShellCommand::Copy,
        "x" | "clear" => ShellCommand::Clear,
        "s" | "save" => ShellCommand::Save {
            target: if rest.is_empty() {
                None
            } else {
                Some(PathBuf::from(rest))
            },
            overwrite: false,
        },
        "l" | "length" => {
            if rest.is_empty() {
                return Err(PwgenError::InvalidInput("Usage: length N".to_string()));
            }
            ShellCommand::Length(parse_length(rest)?)
        }
        "t" | "toggle" => {
            if rest.is_empty() {
                return Err(PwgenError::InvalidInput(
                    "Usage: toggle upper|lower|digits|special".to_string(),
                ));
            }
            ShellCommand::Toggle(rest.parse()?)
        }
        "o" | "options" => ShellCommand::Options,
        "h" | "help" | "?" => ShellCommand::Help,
        "q" | "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(PwgenError::InvalidInput(format!(
                "Unknown command '{}'. Type 'help' for a list of commands",
                other
            )));
        }
    };
    Ok(Some(command))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Interactive generator: one session, one clipboard, one action at a time.
pub struct Shell<C: ClipboardSink> {
    session: Session,
    clipboard: C,
    save_dir: PathBuf,
}

impl<C: ClipboardSink> Shell<C> {
    pub fn new(session: Session, clipboard: C, save_dir: PathBuf) -> Self {
        Self {
            session,
            clipboard,
            save_dir,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Runs one command. A failed command leaves the session usable.
    pub fn handle(&mut self, command: ShellCommand) -> Result<Flow> {
        let message = match command {
            ShellCommand::Generate => {
                let password = self.session.generate()?.to_string();
                format!("{}\n{}", password, self.session.strength_status())
            }
            ShellCommand::Copy => {
                self.session.copy_to(&mut self.clipboard)?;
                "Password copied to clipboard!".to_string()
            }
            ShellCommand::Clear => {
                self.session.clear();
                self.session.strength_status()
            }
            ShellCommand::Save { target, overwrite } => {
                let path = self.session.save(target.as_deref(), &self.save_dir, overwrite)?;
                format!("Password saved to {}", path.display())
            }
            ShellCommand::Length(length) => {
                self.session.options_mut().length = length;
                format!("Password Length: {}", length)
            }
            ShellCommand::Toggle(class) => {
                let enabled = self.session.options_mut().toggle(class);
                format!("{}: {}", class.description(), if enabled { "on" } else { "off" })
            }
            ShellCommand::Options => self.describe_options(),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(message))
    }

    fn describe_options(&self) -> String {
        let options = self.session.options();
        let mut lines = vec![format!("Password Length: {}", options.length)];
        for class in CharacterClass::ALL {
            let mark = if options.includes(class) { "[x]" } else { "[ ]" };
            lines.push(format!("{} {}", mark, class.description()));
        }
        lines.push(self.session.strength_status());
        lines.join("\n")
    }
}

pub fn run_shell(settings: &Settings) -> Result<()> {
    let session = Session::new(settings.generation_options());
    let mut shell = Shell::new(session, SystemClipboard::new(), settings.save_dir());
    println!("{}\n", HELP);

    while let Some(line) = prompt_input("pwgen> ")? {
        let outcome = parse_command(&line).and_then(|command| match command {
            Some(command) => shell.handle(command).map(Some),
            None => Ok(None),
        });
        let outcome = match outcome {
            Err(PwgenError::FileExists { path }) => confirm_overwrite(&mut shell, path),
            other => other,
        };
        match outcome {
            Ok(Some(Flow::Continue(message))) => println!("{}", message),
            Ok(Some(Flow::Quit)) => break,
            Ok(None) => {}
            Err(e) => report(&e),
        }
    }
    Ok(())
}

/// Asks before replacing an existing file. Anything but yes keeps the file.
fn confirm_overwrite<C: ClipboardSink>(shell: &mut Shell<C>, path: PathBuf) -> Result<Option<Flow>> {
    let prompt = format!("{} already exists. Overwrite? [y/N] ", path.display());
    let confirmed = prompt_input(&prompt)?
        .map(|answer| parse_bool(&answer).unwrap_or(false))
        .unwrap_or(false);
    if !confirmed {
        return Ok(Some(Flow::Continue("Save cancelled".to_string())));
    }
    shell
        .handle(ShellCommand::Save {
            target: Some(path),
            overwrite: true,
        })
        .map(Some)
}
