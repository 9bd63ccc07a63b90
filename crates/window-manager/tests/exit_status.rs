use std::{
    env,
    path::PathBuf,
    process::{Command, Output},
};

fn window_manager(args: &[&str]) -> Output {
    // An empty HOME keeps a developer's own config out of the picture.
    let home = env::temp_dir().join("window-manager-cli-home");
    Command::new(env!("CARGO_BIN_EXE_window-manager"))
        .args(args)
        .env("HOME", &home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn help_exits_zero() {
    let out = window_manager(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("resize"));
}

#[test]
fn zero_width_percent_is_usage_error() {
    let out = window_manager(&["resize", "500", "0", "50"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!stdout(&out).contains("Successfully"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("between 1 and 100"));
}

#[test]
fn height_over_hundred_is_usage_error() {
    let out = window_manager(&["resize", "500", "50", "101"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn missing_and_extra_arguments_exit_one() {
    assert_eq!(window_manager(&["resize", "500"]).status.code(), Some(1));
    assert_eq!(
        window_manager(&["resize", "500", "50", "50", "top", "more"])
            .status
            .code(),
        Some(1)
    );
    assert_eq!(window_manager(&[]).status.code(), Some(1));
}

#[test]
fn missing_config_file_is_reported() {
    let missing: PathBuf = env::temp_dir().join("window-manager-no-such-config.ron");
    let out = window_manager(&[
        "resize",
        "500",
        "50",
        "50",
        "--config",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Config file not found"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn permission_gate_stops_before_any_window_query() {
    let out = window_manager(&["resize", "500", "50", "50"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("Accessibility permission is not granted"));
    assert!(!text.contains("Failed to resize"));
}
