//! Error taxonomy for the capability catalog.
//!
//! Discovery-time failures are swallowed by the scanner; everything a caller
//! asks for by name surfaces one of the [`CatalogError`] kinds below.

use std::path::PathBuf;
use thiserror::Error;

/// Why a resource name was rejected by the name grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name is {len} characters long (maximum is 64)")]
    TooLong { len: usize },

    #[error("name must not start or end with '-'")]
    HyphenPlacement,

    #[error("name must not contain consecutive hyphens")]
    ConsecutiveHyphens,

    #[error("name contains invalid character {0:?} (allowed: a-z, 0-9, '-')")]
    InvalidCharacter(char),
}

/// Failures while splitting or decoding a spec document.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("document does not start with a '---' line")]
    MissingOpeningDelimiter,

    #[error("frontmatter has no closing '---' line")]
    MissingClosingDelimiter,

    #[error("invalid YAML frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter is not a YAML mapping")]
    NotAMapping,

    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),

    #[error("failed to read spec file: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`CatalogError`] for branching on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    NotFound,
    FileNotFound,
    AlreadyRegistered,
    MissingField,
    NameMismatch,
    DirectoryMismatch,
    Frontmatter,
    Io,
}

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid resource name {name:?}: {source}")]
    InvalidName {
        name: String,
        #[source]
        source: NameError,
    },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("spec file for `{name}` not found at {}", path.display())]
    FileNotFound { name: String, path: PathBuf },

    #[error("resource `{0}` is already registered")]
    AlreadyRegistered(String),

    #[error("resource `{name}` is missing required field `{field}`")]
    MissingField { name: String, field: &'static str },

    #[error("spec file declares `{found}` but `{expected}` was requested")]
    NameMismatch { expected: String, found: String },

    #[error("resource `{name}` lives in directory `{directory}`; directory name must match")]
    DirectoryMismatch { name: String, directory: String },

    #[error("malformed spec file {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidName { .. } => ErrorKind::InvalidName,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::FileNotFound { .. } => ErrorKind::FileNotFound,
            CatalogError::AlreadyRegistered(_) => ErrorKind::AlreadyRegistered,
            CatalogError::MissingField { .. } => ErrorKind::MissingField,
            CatalogError::NameMismatch { .. } => ErrorKind::NameMismatch,
            CatalogError::DirectoryMismatch { .. } => ErrorKind::DirectoryMismatch,
            CatalogError::Frontmatter { .. } => ErrorKind::Frontmatter,
            CatalogError::Io { .. } => ErrorKind::Io,
        }
    }

    /// The name-grammar rejection, if this error is one.
    pub fn name_error(&self) -> Option<NameError> {
        match self {
            CatalogError::InvalidName { source, .. } => Some(*source),
            _ => None,
        }
    }
}

/// Errors surfaced by the outer layers (configuration, logging, CLI).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{count} resource(s) failed validation\n{report}")]
    ValidationFailed { count: usize, report: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
