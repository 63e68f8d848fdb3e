//! The page generator.
//! Expands a glob of per-page content fragments and renders each one into
//! the shared base layout, producing one complete HTML page per fragment.

use crate::config::{Dirs, PageTask};
use crate::context::page_context;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::renderer::{Delimiters, TemplateRenderer};
use globset::{GlobBuilder, GlobSetBuilder};
use log::{debug, info};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Captures the run of word characters immediately preceding the `.htm`
/// suffix, which becomes the page identifier.
static PAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\.htm$").unwrap());

/// Outcome counts for one task run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub written: usize,
    pub failed: usize,
}

/// Derives the page identifier from a content file name.
///
/// # Errors
/// * `Error::MalformedFilename` if the name does not end in `<name>.htm`
pub fn page_name(filename: &str) -> Result<&str> {
    PAGE_NAME
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::MalformedFilename { filename: filename.to_string() })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    fs::write(path, content).map_err(|e| Error::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Renders configured page tasks against one manifest and directory layout.
pub struct PageGenerator<'a> {
    engine: &'a dyn TemplateRenderer,
    manifest: &'a Manifest,
    dirs: &'a Dirs,
}

impl<'a> PageGenerator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        manifest: &'a Manifest,
        dirs: &'a Dirs,
    ) -> Self {
        Self { engine, manifest, dirs }
    }

    /// Collects the content files a task will process: files under `cwd`
    /// matching the source glob, minus the excluded file names.
    pub fn expand(&self, task: &PageTask) -> Result<Vec<PathBuf>> {
        let cwd = Path::new(&task.cwd);
        let mut builder = GlobSetBuilder::new();
        // `*` must not cross directory separators, or files in nested
        // directories would collide on the flat destination name.
        builder.add(GlobBuilder::new(&task.src).literal_separator(true).build()?);
        let glob_set = builder.build()?;

        info!("Expanding {}", cwd.display());

        let mut matches = Vec::new();
        for entry in WalkDir::new(cwd) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(cwd)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
            if !glob_set.is_match(relative) {
                continue;
            }
            let filename = entry.file_name().to_string_lossy();
            if task.exclude.iter().any(|excluded| excluded == filename.as_ref()) {
                debug!("Skipping excluded file {}", filename);
                continue;
            }
            matches.push(entry.path().to_path_buf());
        }
        Ok(matches)
    }

    /// Runs one task instance. Each matched file is processed independently;
    /// with `fail_fast` unset a failing file is logged and the remaining
    /// files are still attempted.
    pub fn run(&self, name: &str, task: &PageTask, fail_fast: bool) -> Result<TaskSummary> {
        let mut summary = TaskSummary::default();

        for source in self.expand(task)? {
            match self.process_page(task, &source) {
                Ok(dest) => {
                    info!("Writing {}", dest.display());
                    summary.written += 1;
                }
                Err(e) if fail_fast => return Err(e),
                Err(e) => {
                    log::error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        debug!(
            "Task '{}' wrote {} page(s), {} failed",
            name, summary.written, summary.failed
        );
        Ok(summary)
    }

    /// Renders a single content file into the base layout and writes the
    /// result. Returns the destination path.
    pub fn process_page(&self, task: &PageTask, source: &Path) -> Result<PathBuf> {
        debug!("Processing {}", source.display());

        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let page = page_name(&filename)?.to_string();

        let content = read_file(source)?;
        let base = read_file(&Path::new(&task.cwd).join(&task.base))?;

        let ctx = page_context(self.manifest, self.dirs, &page, &content);
        let rendered = self.engine.render_recursive(&base, &ctx, &Delimiters::curly())?;

        // Leading path components are dropped; every page lands in the
        // destination directory root.
        let dest = Path::new(&task.dest).join(format!("{}.htm", page));
        write_file(&dest, &rendered)?;

        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name_simple() {
        assert_eq!(page_name("about.htm").unwrap(), "about");
        assert_eq!(page_name("index.htm").unwrap(), "index");
    }

    #[test]
    fn test_page_name_keeps_trailing_word_run() {
        // Only the word-character run right before the suffix counts.
        assert_eq!(page_name("date-time.htm").unwrap(), "time");
    }

    #[test]
    fn test_page_name_rejects_other_extensions() {
        assert!(matches!(
            page_name("readme.md"),
            Err(Error::MalformedFilename { .. })
        ));
        assert!(matches!(
            page_name("about.html"),
            Err(Error::MalformedFilename { .. })
        ));
    }
}
