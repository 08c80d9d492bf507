use std::fs;
use std::io;
use std::path::PathBuf;

use console::strip_ansi_codes;
use next_version::cli::{run_pipeline, PipelineArgs};
use next_version::clipboard::MockClipboard;
use next_version::domain::VersionBump;
use next_version::NextVersionError;
use tempfile::TempDir;

fn manifest_dir(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn args(path: PathBuf) -> PipelineArgs {
    PipelineArgs {
        manifest_path: path,
        copy_to_clipboard: true,
    }
}

#[test]
fn test_release_version_patch_bump() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"1.2.3"}"#);
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let outcome = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap();

    assert_eq!(clipboard.last(), Some("1.2.4"));
    assert_eq!(outcome.next.to_string(), "1.2.4");
    assert_eq!(outcome.bump, VersionBump::Patch);
    assert!(outcome.copied);

    let stdout = String::from_utf8(out).unwrap();
    let plain = strip_ansi_codes(&stdout);
    assert!(plain.contains("demo"));
    assert!(plain.contains("1.2.3"));
    assert!(plain.contains("1.2.4"));
}

#[test]
fn test_prerelease_version_bump() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"2.0.0-beta.3"}"#);
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let outcome = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap();

    assert_eq!(clipboard.last(), Some("2.0.0-beta.4"));
    assert_eq!(outcome.bump, VersionBump::Prerelease);
    assert_eq!(outcome.current, "2.0.0-beta.3");
}

#[test]
fn test_build_metadata_dropped() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"3.1.4+ci.77"}"#);
    let mut clipboard = MockClipboard::new();

    run_pipeline(&args(path), &mut clipboard, &mut io::sink()).unwrap();

    assert_eq!(clipboard.last(), Some("3.1.5"));
}

#[test]
fn test_real_world_manifest() {
    let (_dir, path) = manifest_dir(
        r#"{
  "name": "@scope/widget",
  "version": "0.9.0-rc.1",
  "description": "A widget",
  "bin": { "widget": "bin/index.js" },
  "dependencies": { "semver": "^7.0.0" }
}
"#,
    );
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let outcome = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap();

    assert_eq!(outcome.name, "@scope/widget");
    assert_eq!(clipboard.last(), Some("0.9.0-rc.2"));
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let err = run_pipeline(&args(dir.path().join("package.json")), &mut clipboard, &mut out)
        .unwrap_err();

    assert!(matches!(err, NextVersionError::ManifestNotFound { .. }));
    assert!(err.to_string().contains("package.json"));
    assert_eq!(err.exit_code(), 1);
    assert!(clipboard.writes().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_invalid_json_manifest() {
    let (_dir, path) = manifest_dir("{ name: demo }");
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let err = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap_err();

    assert!(matches!(err, NextVersionError::ManifestInvalid { .. }));
    assert!(err.to_string().contains("valid JSON"));
    assert!(clipboard.writes().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_invalid_version() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"abc"}"#);
    let mut clipboard = MockClipboard::new();
    let mut out = Vec::new();

    let err = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap_err();

    assert!(matches!(err, NextVersionError::VersionInvalid { .. }));
    assert!(err.to_string().contains("abc"));
    assert!(clipboard.writes().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_missing_version() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo"}"#);
    let mut clipboard = MockClipboard::new();

    let err = run_pipeline(&args(path), &mut clipboard, &mut io::sink()).unwrap_err();

    assert!(matches!(err, NextVersionError::VersionInvalid { .. }));
    assert!(err.to_string().contains("undefined"));
}

#[test]
fn test_clipboard_unavailable() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"1.2.3"}"#);
    let mut clipboard = MockClipboard::unavailable("no display server");
    let mut out = Vec::new();

    let err = run_pipeline(&args(path), &mut clipboard, &mut out).unwrap_err();

    assert!(matches!(err, NextVersionError::ClipboardUnavailable(_)));
    assert!(err.to_string().contains("no display server"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_no_copy_mode() {
    let (_dir, path) = manifest_dir(r#"{"name":"demo","version":"1.2.3"}"#);
    let mut clipboard = MockClipboard::unavailable("must not be called");
    let mut out = Vec::new();
    let args = PipelineArgs {
        manifest_path: path,
        copy_to_clipboard: false,
    };

    let outcome = run_pipeline(&args, &mut clipboard, &mut out).unwrap();

    assert!(!outcome.copied);
    assert!(String::from_utf8(out).unwrap().contains("1.2.4"));
}
