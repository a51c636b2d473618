//! Link templates
//!
//! Internal note links plus the external repository links ("Source",
//! "Edit this page", "Add a new note").

use serde::{Deserialize, Serialize};

/// Repository-hosting link templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplates {
    /// Repository web URL, e.g. `https://github.com/jacobparis/garden`
    pub repository: String,
    /// Branch the edit links point at
    pub branch: String,
    /// Directory holding note sources inside the repository
    pub notes_dir: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            repository: "https://github.com/jacobparis/garden".to_string(),
            branch: "master".to_string(),
            notes_dir: "app/notes".to_string(),
        }
    }
}

impl LinkTemplates {
    pub fn new(
        repository: impl Into<String>,
        branch: impl Into<String>,
        notes_dir: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            branch: branch.into(),
            notes_dir: notes_dir.into(),
        }
    }

    /// Detail page for a note
    pub fn note_href(&self, slug: &str) -> String {
        format!("/notes/{}", slug)
    }

    /// Repository home
    pub fn source_url(&self) -> String {
        self.repo().to_string()
    }

    /// Edit link for a note source
    ///
    /// Falls back to `{notes_dir}/{slug}` when the build step did not
    /// record a source path.
    pub fn edit_url(&self, source_path: &str, slug: &str) -> String {
        let path = if source_path.trim().is_empty() {
            format!("{}/{}", self.notes_dir.trim_matches('/'), slug)
        } else {
            source_path.trim_start_matches('/').to_string()
        };

        format!(
            "{}/blob/{}/{}",
            self.repo(),
            urlencoding::encode(&self.branch),
            encode_path(&path)
        )
    }

    /// Link to create a new note in the notes directory
    pub fn new_note_url(&self) -> String {
        format!(
            "{}/new/{}/{}",
            self.repo(),
            urlencoding::encode(&self.branch),
            encode_path(self.notes_dir.trim_matches('/'))
        )
    }

    fn repo(&self) -> &str {
        self.repository.trim_end_matches('/')
    }
}

/// Percent-encode each path segment, keeping the separators
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
