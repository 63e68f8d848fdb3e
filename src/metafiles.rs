//! Packaging-file rendering.
//! Copies the repository's metadata files (manifest copy, README and
//! friends) to their published locations, passing each one through the
//! template engine with the curly delimiters on the way.

use crate::config::Dirs;
use crate::context::base_context;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::renderer::{Delimiters, TemplateRenderer};
use indexmap::IndexMap;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Renders each configured packaging file and writes it to its destination.
/// Entries map a destination path to its source file.
pub fn render_metafiles(
    engine: &dyn TemplateRenderer,
    manifest: &Manifest,
    dirs: &Dirs,
    metafiles: &IndexMap<String, String>,
) -> Result<()> {
    let ctx = base_context(manifest, dirs);

    for (dest, src) in metafiles {
        debug!("Processing {}", src);

        let content = fs::read_to_string(src).map_err(|e| Error::FileReadError {
            path: src.clone(),
            source: e,
        })?;
        let rendered = engine.render_recursive(&content, &ctx, &Delimiters::curly())?;

        let dest_path = Path::new(dest);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
                path: dest.clone(),
                source: e,
            })?;
        }
        fs::write(dest_path, rendered).map_err(|e| Error::FileWriteError {
            path: dest.clone(),
            source: e,
        })?;

        info!("Writing {}", dest);
    }

    Ok(())
}
