use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sinsfx operations
#[derive(Error, Diagnostic, Debug)]
pub enum FxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sinsfx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sinsfx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A required marker or token was not found on the expected line.
    #[error("Expected \"{expected}\" in line: {line}")]
    #[diagnostic(code(sinsfx::format))]
    Format { expected: String, line: usize },

    /// The file uses the binary encoding of the particle format.
    #[error("Binary particle files are not supported")]
    #[diagnostic(
        code(sinsfx::unsupported_variant),
        help("Convert it to TXT format before running this program")
    )]
    UnsupportedVariant,

    #[error("Missing field \"{field}\" in {record} (line {line})")]
    #[diagnostic(code(sinsfx::missing_field))]
    MissingField {
        record: String,
        field: String,
        line: usize,
    },

    #[error("Invalid value for \"{field}\" in line {line}: expected {expected}")]
    #[diagnostic(code(sinsfx::invalid_value))]
    InvalidValue {
        field: String,
        expected: String,
        line: usize,
    },

    #[error("Unknown {what} \"{value}\" in line {line}")]
    #[diagnostic(code(sinsfx::unknown_kind))]
    UnknownKind {
        what: &'static str,
        value: String,
        line: usize,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(sinsfx::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(sinsfx::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl FxError {
    /// Shorthand for a missing-token error.
    pub fn expected(expected: impl Into<String>, line: usize) -> Self {
        FxError::Format {
            expected: expected.into(),
            line,
        }
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
