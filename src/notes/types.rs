//! Core note types
//!
//! - `Note`: one markdown-derived content unit
//! - `NoteContent`: the rendered HTML body produced by the build step
//! - `NoteCollection`: notes in manifest order

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::error::{NoteError, NoteResult};

/// Ordered sequence of notes, in the order the build step emitted them
pub type NoteCollection = [Note];

/// Rendered HTML fragment for a note body
///
/// The content is trusted build output and is written into pages verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NoteContent(String);

impl NoteContent {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// A single note
///
/// Immutable once constructed. The slug is the URL identifier, the
/// `source_path` is the note's path inside the hosting repository and
/// feeds the "edit this page" link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Note {
    slug: String,
    title: String,
    content: NoteContent,
    source_path: String,
}

impl Note {
    /// Create a validated note
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        content: NoteContent,
        source_path: impl Into<String>,
    ) -> NoteResult<Self> {
        let slug = slug.into();
        validate_slug(&slug)?;

        let title = title.into();
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle(slug));
        }

        Ok(Self {
            slug,
            title,
            content,
            source_path: source_path.into(),
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &NoteContent {
        &self.content
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }
}

fn slug_pattern() -> &'static regex::Regex {
    static SLUG_RE: OnceLock<regex::Regex> = OnceLock::new();
    SLUG_RE.get_or_init(|| {
        regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("slug pattern is valid")
    })
}

/// Check that a slug is non-empty and URL-safe
pub fn validate_slug(slug: &str) -> NoteResult<()> {
    if slug_pattern().is_match(slug) {
        Ok(())
    } else {
        Err(NoteError::InvalidSlug(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = Note::new(
            "intro",
            "Intro",
            NoteContent::new("<p>Hello</p>"),
            "app/notes/intro.mdx",
        )
        .unwrap();

        assert_eq!(note.slug(), "intro");
        assert_eq!(note.title(), "Intro");
        assert_eq!(note.content().as_html(), "<p>Hello</p>");
        assert_eq!(note.source_path(), "app/notes/intro.mdx");
    }

    #[test]
    fn test_slug_validation() {
        assert!(validate_slug("intro").is_ok());
        assert!(validate_slug("react-hooks_2").is_ok());
        assert!(validate_slug("Tips").is_ok());

        assert!(validate_slug("").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("a/b").is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = Note::new("intro", "   ", NoteContent::default(), "").unwrap_err();
        assert!(matches!(err, NoteError::EmptyTitle(slug) if slug == "intro"));
    }

    #[test]
    fn test_content_serializes_as_string() {
        let content = NoteContent::new("<h1>Hi</h1>");
        assert_eq!(serde_json::to_string(&content).unwrap(), r#""<h1>Hi</h1>""#);
        assert!(NoteContent::new("  \n").is_empty());
    }
}
