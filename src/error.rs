use std::{
    fmt,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for cleaner documentation generation.
///
/// This enum represents all possible errors that can occur while reading,
/// validating, and rendering a cleaner's bundled documentation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Input file absent or unreadable
    #[error("failed to read '{path}': {details}")]
    Unreadable {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error details
        details: String,
    },

    /// Input is not valid JSON
    #[error("failed to parse JSON at '{location}': {details}")]
    JsonParse {
        /// Location of the JSON being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Required top-level key absent
    #[error("missing required key '{key}' in cleaner docs")]
    MissingKey {
        /// The key that was expected
        key: String,
    },

    /// A value that must be an object is something else
    #[error("expected '{key}' to be an object")]
    NotAnObject {
        /// The key whose value has the wrong shape
        key: String,
    },

    /// A documentation value outside the three supported shapes
    #[error("unsupported value for '{key}': expected an object, a string, or a list of strings, found {found}")]
    UnsupportedValue {
        /// The key whose value is unsupported
        key: String,
        /// Description of the JSON value actually found
        found: String,
    },
}

/// A specialized `Result` type for documentation generation.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `DocsError` for all operations in this crate.
pub type Result<T> = result::Result<T, DocsError>;

impl DocsError {
    /// Creates a read error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path to the file that failed to read
    pub fn read(error: impl fmt::Display, path: &Path) -> Self {
        DocsError::Unreadable {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a JSON parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn json_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DocsError::JsonParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a missing-key error for a required top-level key.
    pub fn missing_key(key: impl Into<String>) -> Self {
        DocsError::MissingKey { key: key.into() }
    }
}
