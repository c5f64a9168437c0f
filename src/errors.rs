//! Error type shared by every stage of the table-to-model conversion.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion errors. Anything that can be recovered from is logged
/// as a warning at the place where it happens and never reaches this type.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("table reader error: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot parse '{value}' as an integer in column '{column}'")]
    InvalidInteger { column: &'static str, value: String },
    #[error("cannot parse '{value}' as a number in {context}")]
    InvalidNumber { context: String, value: String },
    #[error("row has {found} columns, at least {expected} are required")]
    MissingColumns { expected: usize, found: usize },
    #[error("malformed species token '{0}', expected 'id[compartment]'")]
    MalformedSpeciesToken(String),
    #[error("reaction '{reaction}' places a species in '{compartment}', which only holds undeclared metabolites")]
    PlaceholderCompartment { reaction: String, compartment: String },
    #[error("gene association syntax error in '{expression}': {reason}")]
    GprSyntax { expression: String, reason: String },
    #[error("usage: {0}")]
    Usage(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("{table}, line {line}: {source}")]
    Row {
        table: String,
        line: u64,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConversionError::Io {
            path: path.into(),
            source,
        }
    }
}
