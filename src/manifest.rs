//! Package manifest handling.
//! Loads the widget library's `package.json` so its metadata can be exposed
//! to templates as the `pkg` value and to the packaging-file step.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The author block of a package manifest.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single license entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct License {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

/// The repository block of a package manifest.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Repository {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

/// Package metadata as read from `package.json`.
///
/// Fields the templates rely on are typed; everything else is kept in the
/// flattened `extra` map so the full object stays visible as `pkg`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub repository: Repository,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// Loads and parses the package manifest.
///
/// # Errors
/// * `Error::FileReadError` if the manifest cannot be read
/// * `Error::ConfigError` if it is not valid JSON or misses required fields
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let path = path.as_ref();
    debug!("Loading package manifest from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid package manifest: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"name": "pickers", "version": "3.5.0"}"#,
        )
        .unwrap();
        assert_eq!(manifest.name, "pickers");
        assert_eq!(manifest.version, "3.5.0");
        assert!(manifest.licenses.is_empty());
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"name": "pickers", "version": "3.5.0", "keywords": ["date", "time"]}"#,
        )
        .unwrap();
        assert_eq!(
            manifest.extra.get("keywords"),
            Some(&serde_json::json!(["date", "time"]))
        );
    }
}
