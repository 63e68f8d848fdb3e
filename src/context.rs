//! Render-context construction.
//! A fresh context is built for every render; nothing is cached across files.

use crate::config::Dirs;
use crate::manifest::Manifest;
use crate::meta::{file_size, gitrepo_url};
use minijinja::{context, Value};

/// Builds the `meta` value: the sanitized repository URL plus the
/// `fileSize` callable, so templates can report artifact sizes with
/// `meta.fileSize(...)`.
pub fn meta_value(manifest: &Manifest) -> Value {
    context! {
        gitrepo_url => gitrepo_url(&manifest.repository.url),
        fileSize => Value::from_function(|content: String| {
            Value::from_serialize(file_size(&content))
        }),
    }
}

/// The context shared by every render: package metadata, derived metadata
/// and the configured directory paths.
pub fn base_context(manifest: &Manifest, dirs: &Dirs) -> Value {
    context! {
        pkg => Value::from_serialize(manifest),
        meta => meta_value(manifest),
        dirs => Value::from_serialize(dirs),
    }
}

/// The per-page context: the base context extended with the derived page
/// identifier and the raw content of the matched source file.
pub fn page_context(
    manifest: &Manifest,
    dirs: &Dirs,
    page: &str,
    content: &str,
) -> Value {
    context! {
        page => page,
        content => content,
        ..base_context(manifest, dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Repository;

    fn manifest() -> Manifest {
        Manifest {
            name: "pickers".into(),
            version: "3.5.0".into(),
            repository: Repository {
                kind: "git".into(),
                url: "https://example.com/pickers.git".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_meta_value_has_sanitized_repo_url() {
        let meta = meta_value(&manifest());
        let url = meta.get_attr("gitrepo_url").unwrap();
        assert_eq!(url.as_str(), Some("https://example.com/pickers"));
    }

    #[test]
    fn test_page_context_shape() {
        let ctx = page_context(&manifest(), &Dirs::default(), "about", "<p>hi</p>");
        assert_eq!(ctx.get_attr("page").unwrap().as_str(), Some("about"));
        assert_eq!(ctx.get_attr("content").unwrap().as_str(), Some("<p>hi</p>"));
        let pkg = ctx.get_attr("pkg").unwrap();
        assert_eq!(pkg.get_attr("name").unwrap().as_str(), Some("pickers"));
    }
}
