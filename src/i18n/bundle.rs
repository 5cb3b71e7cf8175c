//! String bundles: dotted-key access to a locale's display strings.
//!
//! A bundle is parsed from a nested JSON resource and flattened, so
//! `{"contact": {"form": {"title": "..."}}}` is addressed as
//! `"contact.form.title"`. Bundles are read-only after construction.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading or parsing a string bundle resource.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read bundle resource {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bundle resource {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("bundle resource {path} has a non-string value at key '{key}'")]
    InvalidValue { path: String, key: String },

    #[error("default locale bundle '{locale}' could not be loaded")]
    DefaultUnavailable {
        locale: &'static str,
        #[source]
        source: Box<BundleError>,
    },
}

/// The full set of localized display strings for one locale.
#[derive(Debug, Clone, Default)]
pub struct StringBundle {
    strings: HashMap<String, String>,
}

impl StringBundle {
    /// Build a bundle by flattening a parsed JSON document.
    ///
    /// The root must be an object; every leaf must be a string. Arrays,
    /// numbers, booleans and nulls anywhere in the document are rejected as
    /// a corrupt resource, since they would render as blank or garbled text.
    ///
    /// # Arguments
    /// * `path` - Label used in error messages (usually the file path)
    /// * `root` - The parsed JSON document
    pub fn from_json(path: &str, root: &Value) -> Result<Self, BundleError> {
        let Value::Object(_) = root else {
            return Err(BundleError::InvalidValue {
                path: path.to_string(),
                key: String::new(),
            });
        };

        let mut strings = HashMap::new();
        flatten(path, "", root, &mut strings)?;
        Ok(Self { strings })
    }

    /// Look up the localized text for a dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of keys in the bundle.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the bundle holds no strings at all.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over every dotted key in the bundle.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Recursively flatten a JSON object into dotted keys.
fn flatten(
    path: &str,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), BundleError> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(path, &key, child, out)?;
            }
            Ok(())
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
            Ok(())
        }
        _ => Err(BundleError::InvalidValue {
            path: path.to_string(),
            key: prefix.to_string(),
        }),
    }
}
