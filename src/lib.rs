//! Cleaner documentation generator.
//!
//! Reads a cleaner's bundled JSON document and renders its documented
//! configuration options as a Markdown outline: headings for nested
//! groupings, bullet lines for string-valued options, and verbatim
//! passthrough for pre-formatted list content.
//!
//! # Quick Start
//!
//! ```rust
//! use cleaner_docs::{document::Document, markdown};
//!
//! let document = Document::from_json(
//!     r#"{"docs": {"name": "n", "description": "d",
//!         "general": {"timeout": "Request timeout in seconds."}}}"#,
//! )?;
//!
//! assert_eq!(
//!     markdown::render(&document),
//!     "### General\n\n- `timeout`: Request timeout in seconds.\n"
//! );
//! # Ok::<(), cleaner_docs::DocsError>(())
//! ```

/// Loading and validation of the cleaner documentation tree.
pub mod document;

/// Crate error types and result alias.
pub mod error;

/// Markdown rendering of the documentation tree.
pub mod markdown;

/// Tracing subscriber initialization for diagnostics.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use error::{DocsError, Result};
