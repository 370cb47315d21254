use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pwgen::error::{PwgenError, Severity};
use pwgen::passgen::{GenerationOptions, Refusal};
use pwgen::session::Session;
use pwgen::setclip::ClipboardSink;
use pwgen::strength::StrengthLabel;
use tempfile::tempdir;

// 记录写入内容的剪贴板替身
#[derive(Default)]
struct RecordingClipboard {
    contents: Option<String>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> pwgen::error::Result<()> {
        if self.fail {
            return Err(PwgenError::Clipboard("no active session".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

fn no_classes() -> GenerationOptions {
    GenerationOptions {
        length: 16,
        include_uppercase: false,
        include_lowercase: false,
        include_digits: false,
        include_special: false,
    }
}

#[test]
fn test_generate_rates_the_new_password() {
    let mut session = Session::default();
    assert_eq!(session.strength_status(), "Password Strength: Not Generated");

    let password = session.generate().unwrap().clone();
    assert_eq!(password.char_count(), 16);
    assert_eq!(session.password(), Some(&password));
    assert_eq!(session.strength().unwrap().label, StrengthLabel::VeryStrong);
    assert_eq!(session.strength_status(), "Password Strength: Very Strong");
}

#[test]
fn test_refused_generation_keeps_previous_password() {
    let mut session = Session::default();
    let previous = session.generate().unwrap().clone();

    *session.options_mut() = no_classes();
    let err = session.generate().unwrap_err();
    assert!(matches!(err, PwgenError::Refused(Refusal::NoClassSelected)));
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(session.password(), Some(&previous));
}

#[test]
fn test_options_are_read_on_every_request() {
    let mut session = Session::default();
    session.generate().unwrap();
    session.options_mut().length = 8;
    session.options_mut().include_special = false;
    let password = session.generate().unwrap().clone();
    assert_eq!(password.char_count(), 8);
    assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_clear_resets_password_and_strength() {
    let mut session = Session::default();
    session.generate().unwrap();
    session.clear();
    assert!(session.password().is_none());
    assert!(session.strength().is_none());
    assert_eq!(session.strength_status(), "Password Strength: Not Generated");
}

#[test]
fn test_copy_without_password_leaves_clipboard_untouched() {
    let session = Session::default();
    let mut clipboard = RecordingClipboard::default();
    let err = session.copy_to(&mut clipboard).unwrap_err();
    assert!(matches!(err, PwgenError::NothingToCopy));
    assert!(clipboard.contents.is_none());
}

#[test]
fn test_copy_places_password_on_clipboard() {
    let mut session = Session::default();
    let password = session.generate().unwrap().to_string();
    let mut clipboard = RecordingClipboard::default();
    session.copy_to(&mut clipboard).unwrap();
    assert_eq!(clipboard.contents.as_deref(), Some(password.as_str()));
}

#[test]
fn test_clipboard_failure_is_surfaced() {
    let mut session = Session::default();
    session.generate().unwrap();
    let mut clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let err = session.copy_to(&mut clipboard).unwrap_err();
    assert!(matches!(err, PwgenError::Clipboard(_)));
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn test_save_without_password_creates_no_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let session = Session::default();
    let err = session.save(None, dir.path(), false).unwrap_err();
    assert!(matches!(err, PwgenError::NothingToSave));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_save_uses_default_name_in_save_dir() {
    let dir = tempdir().expect("Failed to create temp directory");
    let now = NaiveDate::from_ymd_opt(2025, 7, 2)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap();
    let mut session = Session::default();
    let password = session.generate().unwrap().to_string();

    let path = session.save_at(None, dir.path(), &now, false).unwrap();
    assert_eq!(path, dir.path().join("password_2025-07-02_09-05-07.txt"));
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        format!("Generated Password (2025-07-02 09:05:07):\n{}", password)
    );
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempdir().expect("Failed to create temp directory");
    let target = dir.path().join("nested").join("deeper").join("mine.txt");
    let mut session = Session::default();
    session.generate().unwrap();

    let path = session.save(Some(target.as_path()), dir.path(), false).unwrap();
    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_save_into_existing_directory_appends_file_name() {
    let dir = tempdir().expect("Failed to create temp directory");
    let mut session = Session::default();
    session.generate().unwrap();

    let path = session.save(Some(dir.path()), dir.path(), false).unwrap();
    assert_eq!(path.parent(), Some(dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("password_") && name.ends_with(".txt"));
}

#[test]
fn test_save_keeps_existing_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "important").unwrap();
    let mut session = Session::default();
    session.generate().unwrap();

    let err = session.save(Some(notes.as_path()), dir.path(), false).unwrap_err();
    assert!(matches!(&err, PwgenError::FileExists { path } if path == &notes));
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(fs::read_to_string(&notes).unwrap(), "important");
}

#[test]
fn test_save_with_overwrite_replaces_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "an older and much longer file body").unwrap();
    let mut session = Session::default();
    let password = session.generate().unwrap().to_string();

    session.save(Some(notes.as_path()), dir.path(), true).unwrap();
    let contents = fs::read_to_string(&notes).unwrap();
    assert!(contents.starts_with("Generated Password ("));
    assert!(contents.ends_with(&format!("):\n{}", password)));
}

#[test]
fn test_save_into_new_directory_named_with_trailing_separator() {
    let dir = tempdir().expect("Failed to create temp directory");
    let target = format!("{}{}", dir.path().join("newdir").display(), std::path::MAIN_SEPARATOR);
    let mut session = Session::default();
    session.generate().unwrap();

    let path = session.save(Some(Path::new(&target)), dir.path(), false).unwrap();
    assert_eq!(path.parent(), Some(dir.path().join("newdir").as_path()));
    assert!(path.is_file());
}

#[cfg(unix)]
#[test]
fn test_save_into_read_only_directory_reports_permission() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("Failed to create temp directory");
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

    // Root ignores directory permissions.
    if fs::write(locked.join("probe"), b"x").is_ok() {
        return;
    }

    let mut session = Session::default();
    session.generate().unwrap();
    let err = session
        .save(Some(locked.join("pw.txt").as_path()), dir.path(), false)
        .unwrap_err();
    assert!(matches!(err, PwgenError::PermissionDenied { .. }));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
}
