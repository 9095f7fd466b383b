use std::process::Command;

#[test]
fn missing_target_exits_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_redirected"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("target URL missing"), "stderr: {}", stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn empty_target_exits_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_redirected"))
        .args(["--target", "", "--port", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("target URL missing"), "stderr: {}", stderr);
}
