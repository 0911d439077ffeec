use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn write_scene(s: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(s.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_swan(args: &[&str], scene: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swan"))
        .args(args)
        .arg(scene)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn cli_loads_valid_scene() {
    let file = write_scene("Light Point 0 1 0 1 1 1\nObject Diffuse 1 1 1 Sphere 0 0 -5 1\n");
    let out = run_swan(&["--cat"], file.path());
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "Object Diffuse 1 1 1 Sphere 0 0 -5 1\nLight Point 0 1 0 1 1 1\n"
    );
}

#[test]
fn cli_unknown_light_keyword() {
    let file = write_scene("Light Point 0 1 0 1 1 1\n\nLight Spot 0 0 0 1 1 1\n");
    let out = run_swan(&[], file.path());
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line: 3"), "stderr: {}", stderr);
    assert!(stderr.contains("Spot"), "stderr: {}", stderr);
}

#[test]
fn cli_unknown_keyword() {
    let file = write_scene("# camera first\nCamera 0 0 0\n");
    let out = run_swan(&[], file.path());
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line: 2"), "stderr: {}", stderr);
    assert!(stderr.contains("Camera"), "stderr: {}", stderr);
}

#[test]
fn cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let out = run_swan(&[], &path);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("could not be opened"), "stderr: {}", stderr);
    assert!(stderr.contains("missing.txt"), "stderr: {}", stderr);
}
