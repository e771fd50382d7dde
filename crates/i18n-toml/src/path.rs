//! Dotted lookup paths and typed traversal of parsed TOML tables

use crate::error::{I18nError, I18nResult};
use toml::{Table, Value};

/// A lookup path split into its file segment and key chain.
///
/// `"messages.info.welcome"` names the file `messages` and the keys
/// `["info", "welcome"]`. An empty key chain selects the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPath<'a> {
    /// Resource file base name, without extension
    pub file: &'a str,
    /// Keys to walk inside the parsed file
    pub keys: Vec<&'a str>,
}

impl<'a> LookupPath<'a> {
    /// Split a dotted path on `.`
    pub fn parse(path: &'a str) -> Self {
        let mut segments = path.split('.');
        // split always yields at least one item
        let file = segments.next().unwrap_or_default();
        Self {
            file,
            keys: segments.collect(),
        }
    }

    /// Whether the file segment can safely be joined onto the locale directory.
    ///
    /// Empty names and anything that could leave the directory are rejected.
    pub fn has_valid_file(&self) -> bool {
        !self.file.is_empty() && !self.file.contains(['/', '\\'])
    }
}

/// Human-readable TOML type name used in `TypeMismatch` errors
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::Table(_) => "table",
    }
}

/// Walk `keys` from the root table of `file`.
///
/// Returns `None` when the chain is empty, meaning the caller wants the
/// root table itself.
pub fn walk<'t>(root: &'t Table, file: &str, keys: &[&str]) -> I18nResult<Option<&'t Value>> {
    let mut traversed = file.to_string();
    let mut table = root;
    let mut found = None;

    for (index, key) in keys.iter().enumerate() {
        let value = table.get(*key).ok_or_else(|| I18nError::KeyMissing {
            key: (*key).to_string(),
            traversed: traversed.clone(),
        })?;
        traversed.push('.');
        traversed.push_str(key);

        if index + 1 < keys.len() {
            table = value.as_table().ok_or_else(|| I18nError::TypeMismatch {
                path: traversed.clone(),
                expected: "table",
                found: type_name(value),
            })?;
        }
        found = Some(value);
    }

    Ok(found)
}
