use assert_cmd::Command;

pub fn bear_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bear-tools").unwrap();
    cmd.env_remove("BEAR_TOOLS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `bear-tools json` on `input` via stdin and parse stdout as JSON
pub fn json_from_stdin(input: &str) -> serde_json::Value {
    let output = bear_cmd()
        .arg("json")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success(), "json command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
