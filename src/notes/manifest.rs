//! Note manifest
//!
//! The markdown build step writes a JSON manifest describing every note:
//!
//! ```json
//! {
//!   "generated_at": "2024-03-01T12:00:00Z",
//!   "notes": [
//!     { "slug": "intro", "title": "Intro", "pathname": "app/notes/intro.mdx", "html": "<p>..</p>" },
//!     { "slug": "tips", "title": "Tips", "pathname": "app/notes/tips.mdx", "content_path": "tips.html" }
//!   ]
//! }
//! ```
//!
//! `content_path` is resolved relative to the manifest's directory.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{NoteError, NoteResult};
use super::types::{Note, NoteContent};

/// Parsed manifest file
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// When the build step produced this manifest
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    /// Note entries in display order
    #[serde(default)]
    pub notes: Vec<ManifestEntry>,
}

/// One note as described by the build step
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub slug: String,
    pub title: String,
    /// Repository path of the note source
    #[serde(default)]
    pub pathname: String,
    /// Inline rendered HTML
    #[serde(default)]
    pub html: Option<String>,
    /// Rendered HTML stored next to the manifest
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn read(path: &Path) -> NoteResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NoteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|e| match e {
            NoteError::Manifest { error, .. } => NoteError::Manifest {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse manifest JSON
    pub fn parse(json: &str) -> NoteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every entry into a validated note
    ///
    /// `base_dir` anchors relative `content_path` values.
    pub fn into_notes(self, base_dir: &Path) -> NoteResult<Vec<Note>> {
        self.notes
            .into_iter()
            .map(|entry| entry.into_note(base_dir))
            .collect()
    }
}

impl ManifestEntry {
    fn into_note(self, base_dir: &Path) -> NoteResult<Note> {
        let content = match (self.html, self.content_path) {
            (Some(html), None) => NoteContent::new(html),
            (None, Some(rel)) => {
                let path = base_dir.join(rel);
                let html = std::fs::read_to_string(&path)
                    .map_err(|source| NoteError::Io { path, source })?;
                NoteContent::new(html)
            }
            _ => return Err(NoteError::AmbiguousContent(self.slug)),
        };

        Note::new(self.slug, self.title, content, self.pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_inline_manifest() {
        let manifest = Manifest::parse(
            r#"{
                "generated_at": "2024-03-01T12:00:00Z",
                "notes": [
                    {"slug": "intro", "title": "Intro", "pathname": "app/notes/intro.mdx", "html": "<p>Hi</p>"}
                ]
            }"#,
        )
        .unwrap();

        assert!(manifest.generated_at.is_some());
        let notes = manifest.into_notes(Path::new(".")).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].slug(), "intro");
        assert_eq!(notes[0].source_path(), "app/notes/intro.mdx");
    }

    #[test]
    fn test_content_path_resolved_relative_to_manifest() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("tips.html"), "<p>Tip</p>").unwrap();
        let manifest_path = dir.path().join("notes.json");
        std::fs::write(
            &manifest_path,
            r#"{"notes": [{"slug": "tips", "title": "Tips", "content_path": "tips.html"}]}"#,
        )
        .unwrap();

        let notes = Manifest::read(&manifest_path)
            .unwrap()
            .into_notes(dir.path())
            .unwrap();
        assert_eq!(notes[0].content().as_html(), "<p>Tip</p>");
    }

    #[test]
    fn test_entry_needs_exactly_one_content_source() {
        let neither = Manifest::parse(r#"{"notes": [{"slug": "a", "title": "A"}]}"#).unwrap();
        assert!(matches!(
            neither.into_notes(Path::new(".")),
            Err(NoteError::AmbiguousContent(_))
        ));

        let both = Manifest::parse(
            r#"{"notes": [{"slug": "a", "title": "A", "html": "x", "content_path": "a.html"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            both.into_notes(Path::new(".")),
            Err(NoteError::AmbiguousContent(_))
        ));
    }

    #[test]
    fn test_read_reports_path_on_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "not json").unwrap();

        match Manifest::read(&path) {
            Err(NoteError::Manifest { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Manifest::read(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(NoteError::Io { .. })));
    }
}
