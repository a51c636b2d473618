//! Home scene
//!
//! Resolves the route's slug against the registry and produces one of two
//! views:
//!
//! ```text
//! slug -> lookup -> Some(note) -> Detail (menu chrome + note)
//!                -> None       -> Index  (bare note list)
//! ```
//!
//! Rendering is a pure function of the route, the registry and the UI
//! state.

use std::sync::Arc;

use super::links::LinkTemplates;
use crate::layout::{MenuLayout, MenuViewModel, UiState};
use crate::notes::{Note, NoteRegistry};

/// Route parameters consumed by the scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub slug: Option<String>,
}

impl Route {
    pub fn index() -> Self {
        Self { slug: None }
    }

    pub fn note(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
        }
    }
}

/// A link to a note's detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLink<'a> {
    pub title: &'a str,
    pub href: String,
}

/// Detail header: note title and the repository link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailHeader<'a> {
    pub title: &'a str,
    pub source_url: String,
}

/// Detail sidebar: every note plus the "add a new note" link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSidebar<'a> {
    pub links: Vec<NoteLink<'a>>,
    pub new_note_url: String,
}

/// Detail main region: the note body and its edit link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent<'a> {
    pub note: &'a Note,
    pub edit_url: String,
}

pub type DetailLayout<'a> = MenuLayout<DetailHeader<'a>, DetailSidebar<'a>, DetailContent<'a>>;

/// Bare note list shown when no note is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexView<'a> {
    pub links: Vec<NoteLink<'a>>,
}

/// What the scene renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView<'a> {
    Detail(DetailLayout<'a>),
    Index(IndexView<'a>),
}

impl HomeView<'_> {
    pub fn is_detail(&self) -> bool {
        matches!(self, HomeView::Detail(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, HomeView::Index(_))
    }
}

/// Root scene: route -> registry lookup -> view
#[derive(Debug, Clone)]
pub struct HomeScene {
    registry: Arc<NoteRegistry>,
    links: LinkTemplates,
}

impl HomeScene {
    pub fn new(registry: Arc<NoteRegistry>, links: LinkTemplates) -> Self {
        Self { registry, links }
    }

    pub fn registry(&self) -> &NoteRegistry {
        &self.registry
    }

    pub fn links(&self) -> &LinkTemplates {
        &self.links
    }

    /// The note selected by the route, if any
    pub fn resolve(&self, route: &Route) -> Option<&Note> {
        route
            .slug
            .as_deref()
            .and_then(|slug| self.registry.lookup(slug))
    }

    /// Links to every note, in registry order
    pub fn note_links(&self) -> Vec<NoteLink<'_>> {
        self.registry
            .all()
            .iter()
            .map(|note| NoteLink {
                title: note.title(),
                href: self.links.note_href(note.slug()),
            })
            .collect()
    }

    pub fn render(&self, route: &Route, ui: UiState) -> HomeView<'_> {
        match self.resolve(route) {
            Some(note) => HomeView::Detail(self.detail(note, ui)),
            None => {
                if let Some(slug) = &route.slug {
                    tracing::debug!(slug = %slug, "No note for slug, rendering index");
                }
                HomeView::Index(IndexView {
                    links: self.note_links(),
                })
            }
        }
    }

    fn detail<'a>(&'a self, note: &'a Note, ui: UiState) -> DetailLayout<'a> {
        let header = DetailHeader {
            title: note.title(),
            source_url: self.links.source_url(),
        };
        let sidebar = DetailSidebar {
            links: self.note_links(),
            new_note_url: self.links.new_note_url(),
        };
        let content = DetailContent {
            note,
            edit_url: self.links.edit_url(note.source_path(), note.slug()),
        };

        MenuViewModel::new(ui, header, sidebar, content).compose()
    }
}
