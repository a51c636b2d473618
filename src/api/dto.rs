//! Data Transfer Objects
//!
//! Response types for the JSON endpoints consumed by the browser UI.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::notes::Note;
use crate::scene::LinkTemplates;

// ============================================
// NOTE DTOs
// ============================================

/// One entry of the note list
#[derive(Debug, Serialize)]
pub struct NoteSummary {
    pub slug: String,
    pub title: String,
    /// Detail page path
    pub href: String,
}

impl NoteSummary {
    pub fn from_note(note: &Note, links: &LinkTemplates) -> Self {
        Self {
            slug: note.slug().to_string(),
            title: note.title().to_string(),
            href: links.note_href(note.slug()),
        }
    }
}

/// Repository links shared by every page
#[derive(Debug, Serialize)]
pub struct SiteLinks {
    pub source_url: String,
    pub new_note_url: String,
}

/// Note list response
#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Breakpoint name at which the sidebar becomes static
    pub static_breakpoint: String,
    pub links: SiteLinks,
    pub notes: Vec<NoteSummary>,
}

/// Full note response
#[derive(Debug, Serialize)]
pub struct NoteDetailResponse {
    pub slug: String,
    pub title: String,
    pub href: String,
    /// Rendered HTML body
    pub html: String,
    pub source_path: String,
    pub edit_url: String,
}

impl NoteDetailResponse {
    pub fn from_note(note: &Note, links: &LinkTemplates) -> Self {
        Self {
            slug: note.slug().to_string(),
            title: note.title().to_string(),
            href: links.note_href(note.slug()),
            html: note.content().as_html().to_string(),
            source_path: note.source_path().to_string(),
            edit_url: links.edit_url(note.source_path(), note.slug()),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub notes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_generated_at: Option<DateTime<Utc>>,
    pub uptime_seconds: u64,
    pub version: String,
}
