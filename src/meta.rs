//! Derived metadata helpers exposed to templates under `meta`.

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::io::Write;

/// Byte sizes of a text artifact, as reported on the demo pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileSize {
    /// Raw (minified) byte length
    pub min: usize,
    /// gzip-compressed byte length
    pub gzip: usize,
}

/// Returns the repository URL with a single trailing `.git` suffix removed.
/// URLs without the suffix pass through unchanged.
pub fn gitrepo_url(url: &str) -> String {
    url.strip_suffix(".git").unwrap_or(url).to_string()
}

/// Measures the raw and gzip-compressed size of a text artifact.
/// Empty input reports zero for both, gzip framing included.
pub fn file_size(content: &str) -> FileSize {
    if content.is_empty() {
        return FileSize { min: 0, gzip: 0 };
    }
    FileSize { min: content.len(), gzip: gzip_len(content.as_bytes()) }
}

fn gzip_len(bytes: &[u8]) -> usize {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    // Writing to a Vec cannot fail.
    let _ = encoder.write_all(bytes);
    encoder.finish().map(|v| v.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitrepo_url_strips_suffix() {
        assert_eq!(
            gitrepo_url("https://example.com/repo.git"),
            "https://example.com/repo"
        );
    }

    #[test]
    fn test_gitrepo_url_is_idempotent() {
        assert_eq!(
            gitrepo_url("https://example.com/repo"),
            "https://example.com/repo"
        );
        assert_eq!(gitrepo_url(&gitrepo_url("a/b.git")), "a/b");
    }

    #[test]
    fn test_file_size_empty() {
        assert_eq!(file_size(""), FileSize { min: 0, gzip: 0 });
    }

    #[test]
    fn test_file_size_nonempty() {
        let size = file_size("var picker = {};\n");
        assert_eq!(size.min, 17);
        assert!(size.gzip > 0);
    }
}
