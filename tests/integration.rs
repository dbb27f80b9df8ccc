use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_abidoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_json() {
    let assert = cmd()
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // One section per contract
    assert!(output.contains("\"Exchange\""));
    assert!(output.contains("\"Token\""));
    assert!(output.contains("\"ZRXToken\""));
    // Call paths: generic lowering and the ZRXToken override
    assert!(output.contains("\"callPath\": \"exchange.\""));
    assert!(output.contains("\"callPath\": \"token.\""));
    assert!(output.contains("\"callPath\": \"zrxToken.\""));
    // Mapping accessor property
    assert!(output.contains("(bytes32 => uint256)"));
    // All-caps constant is a property
    assert!(output.contains("\"EXTERNAL_QUERY_GAS_LIMIT\""));
    assert!(output.contains("\"typeDocType\": \"Intrinsic\""));
}

#[test]
fn stdin_mode_markdown_format() {
    let assert = cmd()
        .args(["-f", "markdown"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("## Contracts\n"));
    assert!(output.contains("* [ZRXToken](#zrxtoken)"));
    assert!(output.contains("`exchange.fillOrder("));
    assert!(output.contains("#### LogFill"));
    assert!(output.contains("_indexed_"));
}

#[test]
fn stdin_mode_rejects_garbage() {
    cmd()
        .write_stdin("not json at all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

// -- normalization semantics end to end --

#[test]
fn constructor_returns_contract_type() {
    let assert = cmd()
        .args(["--contract", "Exchange"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let docs: serde_json::Value = serde_json::from_str(&output).unwrap();
    let ctor = &docs["Exchange"]["constructors"][0];
    assert_eq!(ctor["isConstructor"], true);
    assert_eq!(ctor["name"], "Exchange");
    assert_eq!(ctor["callPath"], "");
    assert_eq!(ctor["returnType"]["name"], "Exchange");
    assert_eq!(ctor["parameters"][0]["name"], "_zrxToken");
    assert_eq!(ctor["parameters"][0]["isOptional"], false);
}

#[test]
fn method_without_outputs_omits_return_type() {
    let assert = cmd()
        .args(["--contract", "Token"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let docs: serde_json::Value = serde_json::from_str(&output).unwrap();
    let methods = docs["Token"]["methods"].as_array().unwrap();
    let set_balance = methods
        .iter()
        .find(|m| m["name"] == "setBalance")
        .unwrap();
    assert!(set_balance.get("returnType").is_none());
}

#[test]
fn every_function_lands_exactly_once() {
    let assert = cmd()
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let docs: serde_json::Value = serde_json::from_str(&output).unwrap();

    let exchange = &docs["Exchange"];
    let method_names: Vec<&str> = exchange["methods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    let property_names: Vec<&str> = exchange["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();

    assert_eq!(method_names, ["fillOrder"]);
    assert_eq!(property_names, ["EXTERNAL_QUERY_GAS_LIMIT", "filled"]);
}

// -- malformed input tolerance --

#[test]
fn malformed_entries_warn_but_do_not_fail() {
    let assert = cmd()
        .write_stdin(fixture("malformed.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: Broken"))
        .stderr(predicate::str::contains("STUCK_FEE"));

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let docs: serde_json::Value = serde_json::from_str(&output).unwrap();
    // The broken contract still renders what survived
    assert_eq!(docs["Broken"]["methods"][0]["name"], "works");
    assert!(docs["Broken"]["properties"].as_array().unwrap().is_empty());
    // And the healthy contract is untouched
    assert_eq!(docs["Fine"]["events"][0]["name"], "Ping");
}

// -- contract filter --

#[test]
fn contract_filter_includes() {
    let assert = cmd()
        .args(["--contract", "Token"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"Token\""));
    assert!(!output.contains("\"Exchange\""));
}

#[test]
fn contract_filter_excludes() {
    let assert = cmd()
        .args(["--contract", "!Exchange"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("\"fillOrder\""));
    assert!(output.contains("\"Token\""));
    assert!(output.contains("\"ZRXToken\""));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("contracts.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("contracts.json")).unwrap();
    assert!(output.contains("\"callPath\": \"zrxToken.\""));
}

#[test]
fn file_mode_markdown_extension() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "markdown"])
        .arg(fixture_path("contracts.json"))
        .assert()
        .success();

    let output_path = dir.path().join("contracts.md");
    assert!(output_path.exists(), "Should create .md file");
    let output = std::fs::read_to_string(output_path).unwrap();
    assert!(output.starts_with("## Contracts\n"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("contracts.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_unparsable_file() {
    let dir = TempDir::new().unwrap();
    let mut bad = NamedTempFile::with_suffix(".json").unwrap();
    bad.write_all(b"{ this is not json").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(bad.path().to_str().unwrap())
        .arg(fixture_path("contracts.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping"));

    assert!(dir.path().join("contracts.json").exists());
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin(fixture("contracts.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- idempotence --

#[test]
fn repeated_runs_produce_identical_output() {
    let first = cmd()
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();
    let second = cmd()
        .write_stdin(fixture("contracts.json"))
        .assert()
        .success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
