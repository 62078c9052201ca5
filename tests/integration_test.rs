use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_cvforge"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("generate"));
}

#[test]
fn test_cli_generate_without_style_map_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let markdown = dir.path().join("resume.md");
    std::fs::write(&markdown, "Jane Doe\nEngineer\njane@doe.dev\n").expect("write markdown");

    let output = Command::new(env!("CARGO_BIN_EXE_cvforge"))
        .current_dir(dir.path())
        .arg("generate")
        .arg("resume.md")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
