//! Error types for the nettopo CLI.

use nettopo_graph::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while reading or writing topology files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line arguments or description contents.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Topology construction or analysis rejected the input.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// TOML description could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML description could not be written.
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
