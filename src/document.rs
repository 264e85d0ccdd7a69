//! Loading and validation of a cleaner's bundled documentation.
//!
//! Converts the `docs` object of a cleaner JSON file into a tree of tagged
//! nodes. Value shapes are checked here, at load time, so the renderer
//! never encounters an unsupported value mid-traversal.

use std::{fs, path::Path};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{DocsError, Result};

/// Ordered `(key, node)` pairs of one documentation level.
///
/// Order matches the declared key order of the source JSON object.
pub type Entries = Vec<(String, DocNode)>;

/// A single documented value in the cleaner docs tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    /// Nested grouping of further entries, rendered as its own section.
    Group(Entries),
    /// One documented option, rendered as a bullet line.
    Option(String),
    /// Pre-formatted content emitted verbatim, one line per element.
    Lines(Vec<String>),
}

/// A cleaner's documentation tree, validated and ready for rendering.
///
/// Produced from the `docs` object of the cleaner JSON with the `name` and
/// `description` metadata keys removed. Those two keys are required; the
/// cleaner owns their content and this tool discards it unexamined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    entries: Entries,
}

impl Document {
    /// Loads and validates the documentation tree from a cleaner JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Unreadable`] if the file cannot be read,
    /// [`DocsError::JsonParse`] if it is not valid JSON, and the shape
    /// errors of [`Document::from_json`] otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DocsError::read(e, path))?;
        let root: Value =
            serde_json::from_str(&content).map_err(|e| DocsError::json_parse(e, Some(path)))?;

        let document = Self::from_root(root)?;
        debug!(
            path = %path.display(),
            entries = document.entries.len(),
            "loaded cleaner docs"
        );

        Ok(document)
    }

    /// Validates an in-memory JSON string into a documentation tree.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::JsonParse`] for invalid JSON,
    /// [`DocsError::MissingKey`] if `docs`, `name`, or `description` is
    /// absent, [`DocsError::NotAnObject`] if the root or the `docs` value
    /// is not an object, and [`DocsError::UnsupportedValue`] for any value
    /// that is not an object, a string, or a list of strings.
    ///
    /// # Example
    ///
    /// ```
    /// use cleaner_docs::document::{DocNode, Document};
    ///
    /// let document = Document::from_json(
    ///     r#"{"docs": {"name": "n", "description": "d", "flags": {}}}"#,
    /// )?;
    /// assert_eq!(document.entries().len(), 1);
    /// assert_eq!(document.entries()[0].1, DocNode::Group(Vec::new()));
    /// # Ok::<(), cleaner_docs::DocsError>(())
    /// ```
    pub fn from_json(content: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_str(content).map_err(|e| DocsError::json_parse(e, None))?;

        Self::from_root(root)
    }

    /// The documentation entries in declared key order.
    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    fn from_root(root: Value) -> Result<Self> {
        let Value::Object(mut root) = root else {
            return Err(DocsError::NotAnObject {
                key: "cleaner".to_string(),
            });
        };

        let docs = root
            .shift_remove("docs")
            .ok_or_else(|| DocsError::missing_key("docs"))?;
        let Value::Object(mut docs) = docs else {
            return Err(DocsError::NotAnObject {
                key: "docs".to_string(),
            });
        };

        // Metadata for other consumers of the cleaner file. Both keys are
        // required; deleting a missing key is a shape error.
        for key in ["name", "description"] {
            docs.shift_remove(key)
                .ok_or_else(|| DocsError::missing_key(key))?;
        }

        Ok(Self {
            entries: entries_from_map(docs)?,
        })
    }
}

fn entries_from_map(map: Map<String, Value>) -> Result<Entries> {
    map.into_iter()
        .map(|(key, value)| {
            let node = node_from_value(&key, value)?;
            Ok((key, node))
        })
        .collect()
}

fn node_from_value(key: &str, value: Value) -> Result<DocNode> {
    match value {
        Value::Object(map) => Ok(DocNode::Group(entries_from_map(map)?)),
        Value::String(text) => Ok(DocNode::Option(text)),
        Value::Array(items) => Ok(DocNode::Lines(lines_from_array(key, items)?)),
        other => Err(DocsError::UnsupportedValue {
            key: key.to_string(),
            found: value_description(&other).to_string(),
        }),
    }
}

fn lines_from_array(key: &str, items: Vec<Value>) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(line) => Ok(line),
            other => Err(DocsError::UnsupportedValue {
                key: key.to_string(),
                found: format!("a list containing {}", value_description(&other)),
            }),
        })
        .collect()
}

fn value_description(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
