use std::fs;
use std::path::Path;
use std::process::Command;

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_sha2ref").to_string()
}

/// Point --config at a path that does not exist so a developer's real
/// ~/.sha2ref/config.toml cannot leak into the assertions.
fn no_config(dir: &Path) -> String {
    dir.join("no-config.toml").to_str().unwrap().to_string()
}

#[test]
fn digest_command_hashes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("abc.txt");
    fs::write(&input, "abc").unwrap();

    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .arg("digest")
        .arg(&input)
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
    assert!(stdout.contains("abc.txt"));
}

#[test]
fn digest_command_text_sha224_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .args(["digest", "--text", "abc", "--mode", "sha224", "--json"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"mode\": \"sha224\""));
    assert!(stdout.contains("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"));
    assert!(stdout.contains("\"bytes\": 3"));
}

#[test]
fn digest_command_honors_config_default_mode() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "default_mode = \"sha224\"\n").unwrap();

    let output = Command::new(bin())
        .arg("--config")
        .arg(&cfg)
        .args(["digest", "--text", "abc"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"));
}

#[test]
fn digest_command_rejects_unknown_mode() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .args(["digest", "--text", "abc", "--mode", "sha512"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sha512"));
}

#[test]
fn pad_command_writes_padded_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("msg.bin");
    fs::write(&input, "abc").unwrap();

    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .arg("pad")
        .arg(&input)
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let padded = fs::read(dir.path().join("msg.bin.padded")).expect("padded file exists");
    assert_eq!(padded.len(), 64);
    assert_eq!(&padded[..3], b"abc");
    assert_eq!(padded[3], 0x80);
    let mut trailer = [0u8; 8];
    trailer.copy_from_slice(&padded[56..]);
    assert_eq!(u64::from_be_bytes(trailer), 24);
}

#[test]
fn pad_command_honors_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("msg.bin");
    let out = dir.path().join("blocks.bin");
    fs::write(&input, vec![0u8; 56]).unwrap();

    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .arg("pad")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .output()
        .expect("run");

    assert!(output.status.success());
    // 56 message bytes spill the trailer into a second block
    assert_eq!(fs::read(&out).unwrap().len(), 128);
}

#[test]
fn selftest_passes() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .arg("selftest")
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok: sha256 double block message (NIST)"));
    assert!(stdout.contains("6 case(s) passed"));
}

#[test]
fn trace_prints_all_rounds_of_a_single_block() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin())
        .arg("--config")
        .arg(no_config(dir.path()))
        .args(["digest", "--text", "abc", "--trace"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("block 0"));
    assert!(stdout.contains("round 0x00:"));
    assert!(stdout.contains("round 0x3f:"));
    assert!(stdout.contains("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
}
