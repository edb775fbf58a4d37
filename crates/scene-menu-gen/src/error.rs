use std::path::PathBuf;

/// Errors that can occur while generating the scene menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to walk the project's asset directory.
    #[error("Asset scan error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Settings or build-list file exists but could not be parsed.
    #[error("Config parse error for {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Settings or build-list could not be serialized.
    #[error("Config write error for {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    /// Scene filename cannot be turned into an identifier.
    #[error("Scene contains invalid characters: {name}")]
    InvalidSceneName { name: String },

    /// The generator's own script is not in the asset index, so there is
    /// nowhere to put the output.
    #[error("Generator asset not found in project: {0}")]
    GeneratorNotFound(String),

    /// A call into the editor host failed.
    #[error("Host {operation} failed: {message}")]
    Host {
        operation: &'static str,
        message: String,
    },
}

impl MenuError {
    /// Wrap a host error, tagging it with the operation that produced it.
    pub fn host(operation: &'static str, err: impl std::fmt::Display) -> Self {
        MenuError::Host {
            operation,
            message: err.to_string(),
        }
    }
}
