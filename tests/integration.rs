use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apigen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

const FOO_DOC: &str = "<h4>Foo</h4><p>A thing.</p>\
    <table><tr><th>Field</th><th>Type</th><th>Description</th></tr>\
    <tr><td>bar</td><td>Integer</td><td>A number</td></tr></table>";

const GET_FOO_DOC: &str = "<h4>getFoo</h4><p>Use this method to get a foo. Integer is returned.</p>\
    <table><tr><th>Parameter</th><th>Type</th><th>Required</th><th>Description</th></tr>\
    <tr><td>chat_id</td><td>Integer</td><td>Yes</td><td>Target chat</td></tr></table>";

// -- struct dialect --

#[test]
fn struct_dialect_from_file() {
    let expected = std::fs::read_to_string(fixture_path("botapi.expected.go")).unwrap();
    let assert = cmd().arg(fixture_path("botapi.html")).assert().success();
    assert_eq!(stdout_of(assert), expected);
}

#[test]
fn struct_dialect_from_stdin() {
    let assert = cmd().arg("-").write_stdin(FOO_DOC).assert().success();
    assert_eq!(
        stdout_of(assert),
        "package telegram\n\n// A thing.\ntype Foo struct {\n  // A number\n  Bar int64 `json:\"bar\"`\n}\n"
    );
}

#[test]
fn function_signature_with_result() {
    cmd()
        .arg("-")
        .write_stdin(GET_FOO_DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "// func getFoo(chatID int64) (int64, error)\n",
        ));
}

#[test]
fn custom_package_and_width() {
    let assert = cmd()
        .args(["-", "--package", "botapi", "--width", "20"])
        .write_stdin(GET_FOO_DOC)
        .assert()
        .success();
    assert_eq!(
        stdout_of(assert),
        "package botapi\n\n// Use this method to\n// get a foo. Integer\n// is returned.\n// func getFoo(chatID int64) (int64, error)\n"
    );
}

#[test]
fn skip_functions() {
    let assert = cmd()
        .arg(fixture_path("botapi.html"))
        .arg("--skip-functions")
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.contains("type Update struct {"));
    assert!(!output.contains("func getUpdates"));
    assert!(!output.contains("func sendMessage"));
}

#[test]
fn start_at_heading() {
    let assert = cmd()
        .arg(fixture_path("botapi.html"))
        .args(["--start-at", "Message"])
        .assert()
        .success();
    let output = stdout_of(assert);
    assert!(output.contains("type Message struct {"));
    assert!(output.contains("type InlineKeyboardMarkup struct {"));
    assert!(!output.contains("type Update struct {"));
    assert!(!output.contains("sendMessage"));
}

#[test]
fn start_at_unknown_heading_fails() {
    cmd()
        .arg(fixture_path("botapi.html"))
        .args(["--start-at", "Nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("heading not found: Nonexistent"));
}

#[test]
fn opaque_type_option() {
    cmd()
        .arg(fixture_path("botapi.html"))
        .args(["--opaque", "PhotoSize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo []interface{} `json:\"photo\"`"));
}

#[test]
fn output_is_deterministic() {
    let first = stdout_of(cmd().arg(fixture_path("botapi.html")).assert().success());
    let second = stdout_of(cmd().arg(fixture_path("botapi.html")).assert().success());
    assert_eq!(first, second);
}

// -- message dialect --

#[test]
fn message_dialect_from_file() {
    let expected = std::fs::read_to_string(fixture_path("botapi.expected.proto")).unwrap();
    let assert = cmd()
        .arg(fixture_path("botapi.html"))
        .args(["--dialect", "message"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected);
}

// -- json dialect --

#[test]
fn json_dialect_dumps_model() {
    let assert = cmd()
        .args(["-", "-d", "json"])
        .write_stdin(FOO_DOC)
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(assert)).unwrap();
    assert_eq!(value[0]["name"], "Foo");
    assert_eq!(value[0]["kind"], "type");
    assert_eq!(value[0]["description"], "A thing.");
    assert_eq!(value[0]["params"][0]["name"], "bar");
}

// -- degraded input --

#[test]
fn document_without_tables_yields_empty_module() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<h4>Intro</h4><p>Nothing here.</p><h4>More</h4>")
        .unwrap();
    let assert = cmd().arg(file.path()).assert().success();
    assert_eq!(stdout_of(assert), "package telegram\n");
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .arg("/nonexistent/botapi.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/botapi.html"));
}

#[test]
fn unreachable_url_fails() {
    cmd()
        .args(["--url", "http://127.0.0.1:1/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch http://127.0.0.1:1/"));
}

#[test]
fn unknown_dialect_rejected() {
    cmd()
        .args(["-", "--dialect", "yaml"])
        .write_stdin(FOO_DOC)
        .assert()
        .failure();
}

#[test]
fn zero_width_rejected() {
    cmd()
        .args(["-", "--width", "0"])
        .write_stdin(FOO_DOC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width must be greater than zero"));
}
