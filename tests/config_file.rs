use std::fs;

use arithmos::{ArithmosError, CalculationMethod, Config};

#[test]
fn relative_table_resolves_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tiny.csv"),
        "character,script,Gematria,Ordinal,Reduced,Sumerian,Primes,Squared,MisparGadol,MisparShemi\nQ,Latin,5,5,5,30,11,25,0,0\n",
    )
    .unwrap();
    let config_path = dir.path().join("arithmos.json");
    fs::write(&config_path, r#"{"methods": ["Gematria"], "table": "tiny.csv"}"#).unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.methods, CalculationMethod::GEMATRIA);
    assert_eq!(config.table.as_deref(), Some(dir.path().join("tiny.csv").as_path()));

    let table = config.load_table().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.compute_value("QQ", CalculationMethod::GEMATRIA).unwrap(), 10);
}

#[test]
fn missing_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ArithmosError::Io(_)));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn missing_table_is_io_error() {
    let config = Config {
        table: Some("/nonexistent/values.csv".into()),
        ..Config::default()
    };
    assert!(matches!(config.load_table(), Err(ArithmosError::Io(_))));
}
