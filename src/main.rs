//! htmlify's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates configuration
//! loading, page generation and packaging-file rendering.

use htmlify::{
    cli::{get_args, Args},
    config::{find_config, load_config},
    error::{default_error_handler, Error, Result},
    manifest::load_manifest,
    metafiles::render_metafiles,
    pages::PageGenerator,
    renderer::MiniJinjaRenderer,
};
use std::path::Path;

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates and loads the build configuration
/// 2. Loads the package manifest
/// 3. Interpolates configuration self-references
/// 4. Runs the selected page tasks
/// 5. Renders the packaging metadata files
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let config_path = find_config(args.config)?;
    let config = load_config(&config_path)?;

    let config_root = config_path.parent().unwrap_or(Path::new("."));
    let manifest = load_manifest(config_root.join(&config.manifest))?;
    let config = config.interpolate(&manifest, &engine)?;

    // Resolve the requested task names up front.
    let selected: Vec<&String> = if args.tasks.is_empty() {
        config.pages.keys().collect()
    } else {
        for name in &args.tasks {
            if !config.pages.contains_key(name) {
                return Err(Error::ConfigError(format!("Unknown page task '{}'", name)));
            }
        }
        args.tasks.iter().collect()
    };

    let generator = PageGenerator::new(&engine, &manifest, &config.dirs);

    let mut first_failure: Option<Error> = None;
    let mut written = 0;
    for name in selected {
        let task = &config.pages[name];
        let summary = generator.run(name, task, args.fail_fast)?;
        written += summary.written;
        if summary.failed > 0 && first_failure.is_none() {
            first_failure =
                Some(Error::TaskError { task: name.clone(), count: summary.failed });
        }
    }

    if !args.skip_metafiles && !config.metafiles.is_empty() {
        render_metafiles(&engine, &manifest, &config.dirs, &config.metafiles)?;
    }

    if let Some(err) = first_failure {
        return Err(err);
    }

    println!("Build completed: {} page(s) written.", written);
    Ok(())
}
