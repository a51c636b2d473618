//! Note data from the API

use serde::{Deserialize, Serialize};

/// One entry of the note list
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NoteSummary {
    pub slug: String,
    pub title: String,
    pub href: String,
}

/// Repository links shown around a note
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteLinks {
    pub source_url: String,
    pub new_note_url: String,
}

/// The note list plus site-wide settings
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NoteList {
    pub notes: Vec<NoteSummary>,
    pub links: SiteLinks,
    #[serde(default = "default_static_breakpoint")]
    pub static_breakpoint: String,
}

fn default_static_breakpoint() -> String {
    "sm".to_string()
}

/// A single note with its rendered body
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NoteDetail {
    pub slug: String,
    pub title: String,
    pub html: String,
    pub edit_url: String,
}
