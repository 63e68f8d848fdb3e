//! Build configuration handling.
//! Loads the `htmlify` configuration file (JSON or YAML) that declares the
//! directory layout, the page-generation tasks and the packaging files,
//! and interpolates references between its own values.

use crate::context::base_context;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::renderer::{Delimiters, TemplateRenderer};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, tried in order.
pub const CONFIG_FILES: [&str; 3] = ["htmlify.json", "htmlify.yml", "htmlify.yaml"];

/// Nested map of configured directory paths, exposed to templates as `dirs`.
pub type Dirs = IndexMap<String, serde_json::Value>;

/// One page-generation task instance.
#[derive(Debug, Clone, Deserialize)]
pub struct PageTask {
    /// Working directory the source glob is resolved against
    pub cwd: String,
    /// Glob selecting content files within `cwd`
    pub src: String,
    /// Exact file names excluded from the glob matches. Used for fragments
    /// the layout consumes directly (the layout shell itself, the hero
    /// fragment) so they are never built as standalone pages.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Destination directory for the rendered pages
    pub dest: String,
    /// Path of the base layout template, relative to `cwd`
    pub base: String,
}

/// Build configuration as declared in `htmlify.{json,yml,yaml}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the package manifest, relative to the config file
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default)]
    pub dirs: Dirs,
    /// Named page-generation tasks
    #[serde(default)]
    pub pages: IndexMap<String, PageTask>,
    /// Packaging files rendered with the curly delimiters: destination
    /// path mapped to its source file.
    #[serde(default)]
    pub metafiles: IndexMap<String, String>,
}

fn default_manifest() -> String {
    "package.json".to_string()
}

/// Locates the configuration file: an explicit path wins, otherwise the
/// first of `CONFIG_FILES` found in the current directory.
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn find_config(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path);
        }
        return Err(Error::ConfigError(format!(
            "Configuration file '{}' does not exist",
            path.display()
        )));
    }

    for file in CONFIG_FILES {
        let path = PathBuf::from(file);
        if path.exists() {
            return Ok(path);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        CONFIG_FILES.join(", ")
    )))
}

/// Loads and parses the configuration file.
/// The content is parsed as JSON first with a YAML fallback.
///
/// # Errors
/// * `Error::FileReadError` if the file cannot be read
/// * `Error::ConfigError` if neither parser accepts the content
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Recursively interpolates template markers in a configuration value.
/// Strings are rendered with the default delimiters; arrays and objects
/// are processed element by element; other values pass through.
fn interpolate_value(
    value: &serde_json::Value,
    context: &minijinja::Value,
    engine: &dyn TemplateRenderer,
) -> Result<serde_json::Value> {
    match value {
        serde_json::Value::String(s) => {
            let processed = engine.render(s, context, &Delimiters::default())?;
            Ok(serde_json::Value::String(processed))
        }
        serde_json::Value::Array(arr) => {
            let mut processed_arr = Vec::new();
            for item in arr {
                processed_arr.push(interpolate_value(item, context, engine)?);
            }
            Ok(serde_json::Value::Array(processed_arr))
        }
        serde_json::Value::Object(obj) => {
            let mut processed_obj = serde_json::Map::new();
            for (k, v) in obj {
                processed_obj.insert(k.clone(), interpolate_value(v, context, engine)?);
            }
            Ok(serde_json::Value::Object(processed_obj))
        }
        _ => Ok(value.clone()),
    }
}

fn interpolate_string(
    s: &str,
    context: &minijinja::Value,
    engine: &dyn TemplateRenderer,
) -> Result<String> {
    engine.render(s, context, &Delimiters::default())
}

impl Config {
    /// Resolves `{{ pkg.… }}` and `{{ dirs.… }}` references inside the
    /// configuration's own string values. The `dirs` map is interpolated
    /// first (against `pkg` only), then the task fields and metafile paths
    /// against the full context.
    pub fn interpolate(
        mut self,
        manifest: &Manifest,
        engine: &dyn TemplateRenderer,
    ) -> Result<Config> {
        let pkg_ctx = base_context(manifest, &Dirs::new());
        let mut dirs = Dirs::new();
        for (key, value) in &self.dirs {
            dirs.insert(key.clone(), interpolate_value(value, &pkg_ctx, engine)?);
        }
        self.dirs = dirs;

        let ctx = base_context(manifest, &self.dirs);
        for task in self.pages.values_mut() {
            task.cwd = interpolate_string(&task.cwd, &ctx, engine)?;
            task.src = interpolate_string(&task.src, &ctx, engine)?;
            task.dest = interpolate_string(&task.dest, &ctx, engine)?;
            task.base = interpolate_string(&task.base, &ctx, engine)?;
        }

        let mut metafiles = IndexMap::new();
        for (dest, src) in &self.metafiles {
            metafiles.insert(
                interpolate_string(dest, &ctx, engine)?,
                interpolate_string(src, &ctx, engine)?,
            );
        }
        self.metafiles = metafiles;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_config() {
        let config = parse_config(
            r#"
dirs:
  src:
    raw: _raw
pages:
  demos:
    cwd: "{{ dirs.src.raw }}"
    src: "*.htm"
    exclude: [base.htm, hero.htm]
    dest: demo
    base: base.htm
"#,
        )
        .unwrap();
        assert_eq!(config.manifest, "package.json");
        assert_eq!(config.pages["demos"].exclude, vec!["base.htm", "hero.htm"]);
    }

    #[test]
    fn test_parse_json_config() {
        let config = parse_config(
            r#"{"pages": {"demos": {"cwd": "_raw", "src": "*.htm", "dest": "demo", "base": "base.htm"}}}"#,
        )
        .unwrap();
        assert_eq!(config.pages["demos"].cwd, "_raw");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("pages: [not, a, map]").is_err());
    }
}
