use std::fs;
use std::process::Command;

fn arithmos(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_arithmos"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run arithmos")
}

#[test]
fn value_for_selected_methods() {
    let out = arithmos(&["value", "AB", "--method", "Gematria", "-m", "Squared"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "Gematria: 3\nSquared: 5\n");
}

#[test]
fn value_json_output() {
    let out = arithmos(&["value", "א", "-m", "MisparShemi", "-m", "Sumerian", "--json", "--breakdown"]);
    assert!(out.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["values"]["MisparShemi"], 111);
    assert_eq!(doc["values"]["Sumerian"], 0);
    assert_eq!(doc["breakdown"]["MisparShemi"][0]["value"], 111);
}

#[test]
fn uppercase_flag_folds_case() {
    let out = arithmos(&["value", "k", "-m", "gematria", "--uppercase"]);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Gematria: 20\n");
    let out = arithmos(&["value", "k", "-m", "gematria"]);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Gematria: 0\n");
}

#[test]
fn skip_inapplicable_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cfg.json");
    fs::write(&config, r#"{"skip_inapplicable": true}"#).unwrap();
    let out = arithmos(&["value", "ΩΜΕΓΑ", "--config", config.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Gematria: 849\n"));
    assert!(!stdout.contains("Sumerian"));
    assert!(!stdout.contains("MisparGadol"));
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn unknown_method_fails() {
    let out = arithmos(&["value", "A", "-m", "Atbash"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Atbash"));
}

#[test]
fn table_export_matches_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");
    let out = arithmos(&["table", "--output", path.to_str().unwrap()]);
    assert!(out.status.success());
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, include_str!("../data/character_values.csv"));
}

#[test]
fn toggle_sequence() {
    let out = arithmos(&["toggle", "--from", "Gematria", "Primes", "Gematria", "Squared"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Primes | Squared\n");

    let out = arithmos(&["toggle", "Ordinal", "Ordinal", "--json"]);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "[]\n");
}
