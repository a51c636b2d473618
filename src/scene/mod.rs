//! Scenes
//!
//! Route-level view composition.
//!
//! - **home**: the note index / note detail scene
//! - **links**: internal and repository link templates

pub mod home;
pub mod links;

pub use home::{
    DetailContent, DetailHeader, DetailLayout, DetailSidebar, HomeScene, HomeView, IndexView,
    NoteLink, Route,
};
pub use links::LinkTemplates;
