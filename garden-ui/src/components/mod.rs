//! UI Components
//!
//! Reusable Leptos components for the notes viewer.

pub mod loading;
pub mod menu;
pub mod note_list;

pub use loading::Loading;
pub use menu::Menu;
pub use note_list::NoteList;
