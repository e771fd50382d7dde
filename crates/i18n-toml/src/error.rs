//! Error types for resource lookup operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing an accessor or resolving a path
#[derive(Error, Debug)]
pub enum I18nError {
    /// The locale directory does not exist or is not a directory
    #[error("Not a directory: {}", path.display())]
    LocaleDirectoryMissing {
        /// Expected `<root>/<locale>` directory
        path: PathBuf,
    },

    /// The first path segment has no matching `.toml` file
    #[error("Resource file not found: {}", path.display())]
    ResourceFileMissing {
        /// Resolved `<root>/<locale>/<file>.toml` path
        path: PathBuf,
    },

    /// A key in the chain is absent from the current table
    #[error("Key not found: '{key}' (in '{traversed}')")]
    KeyMissing {
        /// The missing key
        key: String,
        /// Dotted path walked before the missing key, starting with the file name
        traversed: String,
    },

    /// A lookup tried to descend into, or read, a value of the wrong type
    #[error("Type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Dotted path of the offending value
        path: String,
        /// What the lookup needed
        expected: &'static str,
        /// TOML type actually present
        found: &'static str,
    },

    /// A resource file is not valid TOML
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error, unmodified
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be read or deserialized
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A resource file or locale directory exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
