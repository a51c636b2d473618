//! # Garden
//!
//! A personal notes viewer: lists markdown-derived notes, shows a selected
//! note, and wraps it in a responsive sidebar that is pinned open on wide
//! viewports and collapsible on narrow ones.
//!
//! ## Modules
//!
//! - [`notes`]: Note model, manifest loading and the read-only registry
//! - [`layout`]: Breakpoints and the collapsible menu view model
//! - [`scene`]: Route -> view composition for the home scene
//! - [`render`]: Server-side HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use garden::layout::{MenuState, UiState};
//! use garden::notes::NoteRegistry;
//! use garden::render::{render_page, PageContext};
//! use garden::scene::{HomeScene, LinkTemplates, Route};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Built once, read-only afterwards
//!     let registry = Arc::new(NoteRegistry::load(Path::new("notes/notes.json"))?);
//!     let scene = HomeScene::new(registry, LinkTemplates::default());
//!
//!     let view = scene.render(&Route::note("intro"), UiState::new(MenuState::default(), true));
//!     let html = render_page(&view, &PageContext::new("Garden", "/notes/intro"));
//!
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod layout;
pub mod notes;
pub mod render;
pub mod scene;

// Re-export top-level types for convenience
pub use notes::{Note, NoteCollection, NoteContent, NoteError, NoteRegistry, NoteResult};

pub use layout::{
    Breakpoint, BreakpointError, BreakpointObserver, MenuLayout, MenuState, MenuViewModel,
    UiState, Viewport,
};

pub use scene::{HomeScene, HomeView, LinkTemplates, Route};

pub use render::{render_page, PageContext};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LayoutConfig, LoggingConfig};
