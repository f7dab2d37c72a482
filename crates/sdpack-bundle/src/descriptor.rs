//! The `iconpack.json` descriptor of a source pack.
//!
//! A descriptor is parsed exactly once per operation; the resulting
//! [`Descriptor`] is then handed by reference to every later stage.

use crate::{BundleResult, ICON_FIELD};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a folder is not a usable icon pack.
///
/// Variants are ordered like the checks that produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The name does not refer to a folder under the source root.
    #[error("not a directory")]
    NotADirectory,

    /// The folder has no descriptor file.
    #[error("missing iconpack.json")]
    MissingDescriptor,

    /// The descriptor exists but could not be read.
    #[error("unreadable iconpack.json: {0}")]
    Unreadable(String),

    /// The descriptor is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A required top-level key is absent.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A required key is present but unusable.
    #[error("invalid field \"{field}\": {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Parsed descriptor of a source pack.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Pack identifier; names the bundle directory.
    pub id: String,

    /// Opaque metadata copied verbatim into `manifest.json`.
    pub manifest: Map<String, Value>,
}

impl Descriptor {
    /// Parse descriptor JSON.
    ///
    /// The syntax check comes first, then presence of `manifest`, then
    /// presence of `id`, then the shape of both values.
    pub fn parse(content: &[u8]) -> Result<Self, Rejection> {
        let value: Value =
            serde_json::from_slice(content).map_err(|e| Rejection::InvalidJson(e.to_string()))?;

        let Value::Object(mut root) = value else {
            return Err(Rejection::MissingField("manifest"));
        };

        let manifest = root
            .remove("manifest")
            .ok_or(Rejection::MissingField("manifest"))?;
        let id = root.remove("id").ok_or(Rejection::MissingField("id"))?;

        let id = match id {
            Value::String(id) => validate_id(id)?,
            other => {
                return Err(Rejection::InvalidField {
                    field: "id",
                    reason: format!("expected a string, found {}", kind(&other)),
                });
            }
        };

        let manifest = match manifest {
            Value::Object(manifest) => manifest,
            other => {
                return Err(Rejection::InvalidField {
                    field: "manifest",
                    reason: format!("expected an object, found {}", kind(&other)),
                });
            }
        };

        Ok(Self { id, manifest })
    }

    /// The manifest's icon file name, if it names one.
    pub fn icon(&self) -> Option<&str> {
        self.manifest.get(ICON_FIELD).and_then(Value::as_str)
    }

    /// The manifest serialized compactly, keys in descriptor order.
    pub fn manifest_json(&self) -> BundleResult<String> {
        Ok(serde_json::to_string(&self.manifest)?)
    }
}

/// Ids become directory names, so they must stay a single path component.
fn validate_id(id: String) -> Result<String, Rejection> {
    let invalid = |reason: &str| Rejection::InvalidField {
        field: "id",
        reason: reason.to_string(),
    };

    if id.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if id.contains('/') || id.contains('\\') {
        return Err(invalid("must not contain a path separator"));
    }
    if id == "." || id == ".." {
        return Err(invalid("must not be a relative path component"));
    }
    Ok(id)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
