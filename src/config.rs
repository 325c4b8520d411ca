use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ArithmosError;
use crate::io_utils::io_error;
use crate::method::CalculationMethod;
use crate::table::CharacterValueTable;

/// Runtime configuration for the command line front end.
///
/// Stored as JSON. Every field is optional in the file:
///
/// ```json
/// { "methods": ["Gematria", "MisparShemi"], "table": "my_table.csv", "skip_inapplicable": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Methods reported when none are given on the command line.
    pub methods: CalculationMethod,
    /// Alternative table in the canonical CSV form.
    pub table: Option<PathBuf>,
    /// Leave out methods that apply to none of the scripts in the text.
    pub skip_inapplicable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            methods: CalculationMethod::ALL,
            table: None,
            skip_inapplicable: false,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ArithmosError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArithmosError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| io_error("reading config", path, e))?;
        let mut config = Self::from_json_str(&text)?;
        // relative table paths are resolved against the config file
        if let (Some(table), Some(dir)) = (config.table.as_ref(), path.parent()) {
            if table.is_relative() {
                config.table = Some(dir.join(table));
            }
        }
        debug!(path = %path.display(), methods = %config.methods, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ArithmosError> {
        if self.methods.is_empty() {
            return Err(ArithmosError::Config("no calculation methods selected".into()));
        }
        Ok(())
    }

    /// The configured table, or the builtin one.
    pub fn load_table(&self) -> Result<Cow<'static, CharacterValueTable>, ArithmosError> {
        match &self.table {
            Some(path) => Ok(Cow::Owned(CharacterValueTable::from_csv_path(path)?)),
            None => Ok(Cow::Borrowed(CharacterValueTable::builtin())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_everything() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.methods, CalculationMethod::ALL);
        assert!(matches!(config.load_table().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn parses_method_names() {
        let config =
            Config::from_json_str(r#"{"methods": ["Ordinal", "MisparGadol"], "skip_inapplicable": true}"#)
                .unwrap();
        assert_eq!(config.methods, CalculationMethod::ORDINAL | CalculationMethod::MISPAR_GADOL);
        assert!(config.skip_inapplicable);
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            Config::from_json_str(r#"{"methods": []}"#),
            Err(ArithmosError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"methods": ["Kabbalah"]}"#),
            Err(ArithmosError::Json(_))
        ));
        assert!(Config::from_json_str(r#"{"colour": "red"}"#).is_err());
    }
}
