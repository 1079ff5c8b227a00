use std::fs;
use std::process::Command;

use safelink_icons::{icon_file_name, render, write_icon, write_icons, IconError, ICON_SIZES};
use tempfile::TempDir;

fn file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn file_name_pattern() {
    assert_eq!(icon_file_name(16), "icon16.png");
    assert_eq!(icon_file_name(128), "icon128.png");
}

#[test]
fn write_icons_creates_three_files_in_order() {
    let dir = TempDir::new().unwrap();
    let written = write_icons(dir.path()).unwrap();

    let expected: Vec<_> = ICON_SIZES.iter().map(|&s| dir.path().join(icon_file_name(s))).collect();
    assert_eq!(written, expected);
    assert_eq!(file_names(&dir), ["icon128.png", "icon16.png", "icon48.png"]);
}

#[test]
fn written_png_matches_render() {
    let dir = TempDir::new().unwrap();
    let path = write_icon(dir.path(), 48).unwrap();

    let decoded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(decoded.dimensions(), (48, 48));
    assert_eq!(decoded.into_raw(), render(48).unwrap().into_raw());
}

#[test]
fn missing_directory_is_an_image_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = write_icons(&missing).unwrap_err();
    match err {
        IconError::Image { path, .. } => assert_eq!(path, missing.join("icon16.png")),
        other => panic!("expected an image error, got {other:?}"),
    }
    assert!(!missing.exists());
}

#[test]
fn binary_writes_icons_and_reports_each() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_safelink-icons"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Created icon: icon16.png",
            "Created icon: icon48.png",
            "Created icon: icon128.png",
        ]
    );
    assert_eq!(file_names(&dir), ["icon128.png", "icon16.png", "icon48.png"]);
}
