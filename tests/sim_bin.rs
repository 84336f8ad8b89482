use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .env("OTHELLO_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["outcome"].is_string());
    let black = v["black"].as_u64().unwrap();
    let white = v["white"].as_u64().unwrap();
    assert!(black + white <= 64);
    assert_eq!(black + white, 4 + v["moves"].as_u64().unwrap());
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("99")
            .env("OTHELLO_LOG", "off")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
