use std::io::Write;
use std::process::{Command, Stdio};

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn ttyframe_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_ttyframe").expect("ttyframe test binary not built")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(ttyframe_bin())
        .args(args)
        .env_remove("TTYFRAME_LOGS")
        .output()
        .expect("run ttyframe")
}

#[test]
fn help_mentions_frame() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("bordered text frame"));
    assert!(combined.contains("--title-top-left"));
}

#[test]
fn frames_positional_content() {
    let output = run(&["Hello", "world!"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "┌──────┐\n│Hello │\n│world!│\n└──────┘\n"
    );
}

#[test]
fn reads_piped_stdin() {
    let mut child = Command::new(ttyframe_bin())
        .args(["--border", "ascii"])
        .env_remove("TTYFRAME_LOGS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn ttyframe");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(b"piped\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait ttyframe");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "+-----+\n|piped|\n+-----+\n"
    );
}

#[test]
fn positioned_output_has_no_newlines() {
    let output = run(&["--top", "1", "--left", "2", "--width", "4", "--height", "2"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\x1b[2;3H┌──┐\x1b[3;3H└──┘"
    );
}

#[test]
fn preset_with_no_color_is_plain() {
    let output = run(&["--preset", "error", "--no-color", "boom"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("╔ ⨯ ERROR ╗\n"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn config_file_is_the_base_for_flags() {
    let dir = std::env::temp_dir().join(format!("ttyframe_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("frame.yml");
    std::fs::write(&path, "border: thick\nwidth: 30\n").expect("write config");

    let output = run(&["--config", path.to_str().expect("utf8 path"), "--width", "6", "hi"]);
    let _ = std::fs::remove_dir_all(&dir);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "╔════╗\n║hi  ║\n╚════╝\n"
    );
}

#[test]
fn invalid_border_is_reported() {
    let output = run(&["--border", "unknown", "x"]);
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("wrong value `unknown` for border configuration option"));
}

#[test]
fn invalid_config_border_is_reported() {
    let dir = std::env::temp_dir().join(format!("ttyframe_cli_bad_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("frame.json");
    std::fs::write(&path, r#"{"border": ["unknown"]}"#).expect("write config");

    let output = run(&["--config", path.to_str().expect("utf8 path"), "x"]);
    let _ = std::fs::remove_dir_all(&dir);
    assert!(!output.status.success());
    assert!(combined_output(&output)
        .contains(r#"wrong value `["unknown"]` for border configuration option"#));
}
