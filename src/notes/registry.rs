//! Note registry
//!
//! Built once at startup from the build step's manifest and shared
//! read-only afterwards (see `AppState`).

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;

use super::error::{NoteError, NoteResult};
use super::manifest::Manifest;
use super::types::{Note, NoteCollection};

/// Read-only slug -> note mapping that preserves manifest order
#[derive(Debug, Clone, Default)]
pub struct NoteRegistry {
    /// Notes in display order
    notes: Vec<Note>,
    /// Slug to position lookup
    by_slug: HashMap<String, usize>,
    /// Manifest timestamp, when known
    generated_at: Option<DateTime<Utc>>,
}

impl NoteRegistry {
    /// Build a registry, rejecting duplicate slugs
    pub fn new(notes: Vec<Note>) -> NoteResult<Self> {
        let mut by_slug = HashMap::with_capacity(notes.len());
        for (position, note) in notes.iter().enumerate() {
            if by_slug.insert(note.slug().to_string(), position).is_some() {
                return Err(NoteError::DuplicateSlug(note.slug().to_string()));
            }
        }

        Ok(Self {
            notes,
            by_slug,
            generated_at: None,
        })
    }

    /// An empty registry
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and validate the manifest at `path`
    pub fn load(path: &Path) -> NoteResult<Self> {
        let manifest = Manifest::read(path)?;
        let generated_at = manifest.generated_at;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut registry = Self::new(manifest.into_notes(base_dir)?)?;
        registry.generated_at = generated_at;

        tracing::info!(
            notes = registry.len(),
            manifest = %path.display(),
            "Loaded note registry"
        );

        Ok(registry)
    }

    /// Find a note by slug
    pub fn lookup(&self, slug: &str) -> Option<&Note> {
        self.by_slug.get(slug).map(|&position| &self.notes[position])
    }

    /// All notes in display order
    pub fn all(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::NoteContent;
    use tempfile::tempdir;

    fn note(slug: &str, title: &str) -> Note {
        Note::new(
            slug,
            title,
            NoteContent::new(format!("<p>{}</p>", title)),
            format!("app/notes/{}.mdx", slug),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_returns_matching_slug() {
        let registry =
            NoteRegistry::new(vec![note("intro", "Intro"), note("tips", "Tips")]).unwrap();

        for slug in ["intro", "tips"] {
            assert_eq!(registry.lookup(slug).unwrap().slug(), slug);
        }
    }

    #[test]
    fn test_lookup_absent() {
        let registry = NoteRegistry::new(vec![note("intro", "Intro")]).unwrap();
        assert!(registry.lookup("missing").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_preserves_order() {
        let registry = NoteRegistry::new(vec![
            note("zeta", "Zeta"),
            note("alpha", "Alpha"),
            note("mid", "Mid"),
        ])
        .unwrap();

        let slugs: Vec<&str> = registry.all().iter().map(|n| n.slug()).collect();
        assert_eq!(slugs, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = NoteRegistry::new(vec![note("intro", "Intro"), note("intro", "Again")])
            .unwrap_err();
        assert!(matches!(err, NoteError::DuplicateSlug(s) if s == "intro"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = NoteRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
        assert!(registry.lookup("anything").is_none());
    }

    #[test]
    fn test_load_from_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(
            &path,
            r#"{
                "generated_at": "2024-03-01T12:00:00Z",
                "notes": [
                    {"slug": "intro", "title": "Intro", "pathname": "app/notes/intro.mdx", "html": "<p>Hi</p>"},
                    {"slug": "tips", "title": "Tips", "pathname": "app/notes/tips.mdx", "html": "<p>Tip</p>"}
                ]
            }"#,
        )
        .unwrap();

        let registry = NoteRegistry::load(&path).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.generated_at().is_some());
        assert_eq!(registry.lookup("tips").unwrap().title(), "Tips");
    }

    #[test]
    fn test_load_rejects_invalid_slug() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(
            &path,
            r#"{"notes": [{"slug": "bad slug", "title": "Bad", "html": ""}]}"#,
        )
        .unwrap();

        assert!(matches!(
            NoteRegistry::load(&path),
            Err(NoteError::InvalidSlug(_))
        ));
    }
}
