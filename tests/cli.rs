//! CLI integration tests for convert-d
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn convert_d() -> Command {
    Command::cargo_bin("convert-d").unwrap()
}

fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("convert-d-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    convert_d()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert data between text encodings"));
}

#[test]
fn test_version() {
    convert_d()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert-d"));
}

#[test]
fn test_formats_lists_everything() {
    convert_d()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64url"))
        .stdout(predicate::str::contains("crc32"))
        .stdout(predicate::str::contains("Hex Dump"));
}

#[test]
fn test_formats_input_only_excludes_digests() {
    convert_d()
        .args(["formats", "--input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ipv6"))
        .stdout(predicate::str::contains("sha256").not());
}

#[test]
fn test_formats_json() {
    let output = convert_d()
        .args(["formats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let formats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let formats = formats.as_array().unwrap();
    assert_eq!(formats.len(), 29);
    assert_eq!(formats[0]["id"], "text");
    assert_eq!(formats[0]["input"], true);
}

#[test]
fn test_check() {
    convert_d()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 20 input formats, 29 output formats"));
}

// ============================================================================
// Convert
// ============================================================================

#[test]
fn test_convert_text_to_hex() {
    convert_d()
        .args(["convert", "-f", "text", "-t", "hex"])
        .write_stdin("the little fox JUMPS!!")
        .assert()
        .success()
        .stdout("746865206c6974746c6520666f78204a554d50532121\n");
}

#[test]
fn test_convert_strips_trailing_newline() {
    convert_d()
        .args(["convert", "-f", "text", "-t", "hex"])
        .write_stdin("hi\n")
        .assert()
        .success()
        .stdout("6869\n");
}

#[test]
fn test_convert_from_file() {
    let path = write_temp("input.txt", "the little fox JUMPS!!");
    convert_d()
        .args(["convert", "-f", "text", "-t", "base64url"])
        .arg(&path)
        .assert()
        .success()
        .stdout("dGhlIGxpdHRsZSBmb3ggSlVNUFMhIQ\n");
    std::fs::remove_file(path).ok();
}

#[test]
fn test_convert_upper_case() {
    convert_d()
        .args(["convert", "-f", "text", "-t", "hex", "--case", "upper"])
        .write_stdin("JUMPS")
        .assert()
        .success()
        .stdout("4A554D5053\n");
}

#[test]
fn test_convert_ignore_line_breaks() {
    convert_d()
        .args(["convert", "-f", "base64", "-t", "text", "--ignore-line-breaks"])
        .write_stdin("dGhlIGxpdHRs\nZSBmb3ggSlVN\r\nUFMhIQ==\n")
        .assert()
        .success()
        .stdout("the little fox JUMPS!!\n");
}

#[test]
fn test_convert_to_output_file() {
    let path = std::env::temp_dir().join(format!("convert-d-{}-out.txt", std::process::id()));
    convert_d()
        .args(["convert", "-f", "hex", "-t", "ipv4", "-o"])
        .arg(&path)
        .write_stdin("c0a80001")
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "192.168.0.1\n");
    std::fs::remove_file(path).ok();
}

#[test]
fn test_convert_uses_config_defaults() {
    let path = write_temp(
        "config.toml",
        "[settings]\ndefault_input = \"hex\"\ndefault_output = \"base64\"\n",
    );
    convert_d()
        .arg("--config")
        .arg(&path)
        .arg("convert")
        .write_stdin("40d810e201413fe363b902d62f48ebce")
        .assert()
        .success()
        .stdout("QNgQ4gFBP+NjuQLWL0jrzg==\n");
    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_config_file_fails() {
    convert_d()
        .args(["--config", "/nonexistent/convert-d.toml", "convert", "-f", "text"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_format_suggests() {
    convert_d()
        .args(["--no-color", "convert", "-f", "text", "-t", "bse64"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: unknown output format 'bse64'"))
        .stderr(predicate::str::contains("hint: did you mean 'base64'?"));
}

#[test]
fn test_invalid_input() {
    convert_d()
        .args(["--no-color", "convert", "-f", "binary", "-t", "hex"])
        .write_stdin("0102")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input is not valid binary"));
}

#[test]
fn test_encode_error() {
    convert_d()
        .args(["--no-color", "convert", "-f", "hex", "-t", "ipv6"])
        .write_stdin("0102")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot encode ipv6"));
}

#[test]
fn test_max_size_enforced() {
    convert_d()
        .args(["--max-size", "4", "convert", "-f", "text", "-t", "hex"])
        .write_stdin("0123456789")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

// ============================================================================
// Hash
// ============================================================================

#[test]
fn test_hash_md5() {
    convert_d()
        .args(["hash", "md5"])
        .write_stdin("the little fox JUMPS!!")
        .assert()
        .success()
        .stdout("05095ee87414b4fef7ce0081d0bd486e\n");
}

#[test]
fn test_hash_crc32() {
    convert_d()
        .args(["hash", "crc32"])
        .write_stdin("123456789")
        .assert()
        .success()
        .stdout("cbf43926\n");
}

#[test]
fn test_hash_pbkdf2_with_salt() {
    convert_d()
        .args([
            "hash",
            "pbkdf2",
            "--salt",
            "000102030405060708090a0b0c0d0e0f",
            "--iterations",
            "1000",
        ])
        .write_stdin("hunter2")
        .assert()
        .success()
        .stdout(
            "pbkdf2$sha256$1000$000102030405060708090a0b0c0d0e0f$\
             f5550e89119f593cd3662c6d7da5bd3f7a90e25cd2dc221f58a6166c772753d3\n",
        );
}

#[test]
fn test_hash_salt_requires_pbkdf2() {
    convert_d()
        .args(["hash", "sha256", "--salt", "00"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only apply to pbkdf2"));
}

#[test]
fn test_hash_unknown_algorithm() {
    convert_d()
        .args(["hash", "sha265"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown hash algorithm"))
        .stderr(predicate::str::contains("sha256"));
}
