//! Notes
//!
//! The note data model and the read-only registry the viewer serves from.
//!
//! - **types**: `Note`, `NoteContent`, slug validation
//! - **manifest**: the JSON manifest written by the markdown build step
//! - **registry**: slug lookup over the loaded notes
//! - **error**: error types

pub mod error;
pub mod manifest;
pub mod registry;
pub mod types;

pub use error::{NoteError, NoteResult};
pub use manifest::{Manifest, ManifestEntry};
pub use registry::NoteRegistry;
pub use types::{validate_slug, Note, NoteCollection, NoteContent};
