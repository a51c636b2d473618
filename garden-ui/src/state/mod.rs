//! State
//!
//! Note data received from the Garden server.

pub mod notes;

pub use notes::{NoteDetail, NoteList, NoteSummary, SiteLinks};
