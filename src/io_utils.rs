use std::fmt;
use std::io;
use std::path::Path;

use crate::error::ArithmosError;

/// Error shown to command line users: a message with a hint, plus the
/// underlying cause.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file is not valid UTF-8 text.",
        _ => "Check the path and permissions.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a std::io::Error with context.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn arithmos_cli_error(context: &str, err: ArithmosError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &ArithmosError) -> String {
    use ArithmosError::*;
    match err {
        InvalidArgument(msg) => format!("{msg}. Request one method at a time."),
        UnknownMethod(name) => format!(
            "unknown method '{name}'. Expected one of: {}",
            crate::CalculationMethod::ALL.names().join(", ")
        ),
        Table(msg) => format!("{msg}. Check the table file."),
        Csv(e) => format!("{e}. Check the table file columns."),
        Json(e) => format!("{e}. Check the config file."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(e) => format!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let msg = format_io_error("opening table", Path::new("t.csv"), &err);
        assert!(msg.contains("'t.csv'"));
        assert!(msg.contains("Check that the file exists"));
        assert_eq!(io_error("opening table", Path::new("t.csv"), err).kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn unknown_method_hint_lists_vocabulary() {
        let hint = cli_hint(&ArithmosError::UnknownMethod("Foo".into()));
        assert!(hint.contains("Gematria"));
        assert!(hint.contains("MisparShemi"));
    }
}
