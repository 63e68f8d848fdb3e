use htmlify::config::Dirs;
use htmlify::error::Error;
use htmlify::manifest::{Manifest, Repository};
use htmlify::metafiles::render_metafiles;
use htmlify::renderer::MiniJinjaRenderer;
use indexmap::IndexMap;
use std::fs;
use tempfile::TempDir;

fn make_manifest() -> Manifest {
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
fn test_metafiles_are_rendered_with_curly_delimiters() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("README.md");
    fs::write(&src, "# {% pkg.name %} v{% pkg.version %}\n\nSee {% meta.gitrepo_url %}.\n")
        .unwrap();

    let dest = tmp.path().join("out").join("README.md");
    let mut metafiles = IndexMap::new();
    metafiles.insert(dest.display().to_string(), src.display().to_string());

    let engine = MiniJinjaRenderer::new();
    render_metafiles(&engine, &make_manifest(), &Dirs::new(), &metafiles).unwrap();

    let out = fs::read_to_string(&dest).unwrap();
    assert_eq!(out, "# pickers v3.5.0\n\nSee https://example.com/pickers.\n");
}

#[test]
fn test_missing_source_is_a_read_error() {
    let tmp = TempDir::new().unwrap();
    let mut metafiles = IndexMap::new();
    metafiles.insert(
        tmp.path().join("out.md").display().to_string(),
        tmp.path().join("missing.md").display().to_string(),
    );

    let engine = MiniJinjaRenderer::new();
    let err =
        render_metafiles(&engine, &make_manifest(), &Dirs::new(), &metafiles).unwrap_err();
    assert!(matches!(err, Error::FileReadError { .. }));
}
