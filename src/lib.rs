//! htmlify builds the distributable demo pages and packaging files of a
//! front-end widget library. It expands per-page HTML content fragments
//! into a shared base layout and renders packaging metadata through the
//! same template engine, using an alternate delimiter pair so fragments
//! can carry the standard marker syntax untouched.

/// Command-line interface module for the htmlify application
pub mod cli;

/// Build configuration handling
/// Supports JSON and YAML formats (htmlify.json, htmlify.yml, htmlify.yaml)
pub mod config;

/// Render-context construction for page and packaging renders
pub mod context;

/// Error types and handling for the htmlify application
pub mod error;

/// Package manifest (package.json) loading
pub mod manifest;

/// Derived metadata helpers (repository URL sanitizing, artifact sizing)
pub mod meta;

/// Packaging metadata file rendering
pub mod metafiles;

/// Core page generation
/// Expands content globs and renders each fragment into the base layout
pub mod pages;

/// Template rendering with per-call delimiter pairs
pub mod renderer;
