//! HTML rendering
//!
//! Turns a `HomeView` into a complete HTML document with `maud`. Every
//! interpolated title and URL is escaped by the macro; note bodies are
//! trusted build output and go in through `PreEscaped`.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::layout::MenuToggle;
use crate::scene::{DetailLayout, HomeView, IndexView, NoteLink};

/// Request-specific values the page needs besides the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Site name used in `<title>`
    pub site_title: String,
    /// Path of the current page, target of the menu toggle link
    pub path: String,
    /// Explicit viewport width from the query string, kept on toggle links
    pub viewport_width: Option<u32>,
}

impl PageContext {
    pub fn new(site_title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            path: path.into(),
            viewport_width: None,
        }
    }

    pub fn viewport_width(mut self, width: Option<u32>) -> Self {
        self.viewport_width = width;
        self
    }

    fn toggle_href(&self, toggle: &MenuToggle) -> String {
        match self.viewport_width {
            Some(width) => format!("{}?menu={}&vw={}", self.path, toggle.next.as_query(), width),
            None => format!("{}?menu={}", self.path, toggle.next.as_query()),
        }
    }
}

/// Render a full page for the view
pub fn render_page(view: &HomeView<'_>, page: &PageContext) -> String {
    let (title, body) = match view {
        HomeView::Detail(layout) => (
            format!("{} · {}", layout.header.title, page.site_title),
            render_detail(layout, page),
        ),
        HomeView::Index(index) => (page.site_title.clone(), render_index(index)),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
    .into_string()
}

/// Bare note list
pub fn render_index(index: &IndexView<'_>) -> Markup {
    html! {
        ul { (note_links(&index.links)) }
    }
}

/// Menu chrome around a note
pub fn render_detail(layout: &DetailLayout<'_>, page: &PageContext) -> Markup {
    html! {
        div class="flex flex-col h-screen" {
            header class="flex items-center h-14 border-b" {
                @if let Some(toggle) = &layout.toggle {
                    a class="p-3"
                        href=(page.toggle_href(toggle))
                        aria-controls="sidebar"
                        aria-expanded=(if toggle.expanded { "true" } else { "false" }) {
                        @if toggle.expanded { "Close menu" } @else { "Open menu" }
                    }
                }
                div class="flex items-center justify-between flex-grow px-3" {
                    h1 class="text-lg" { (layout.header.title) }
                    a class="text-blue-500" href=(layout.header.source_url) { "Source" }
                }
            }
            div class="flex flex-grow" {
                @if layout.sidebar_visible {
                    aside id="sidebar" class="flex w-64" {
                        div class="relative flex-grow py-4 border-r" {
                            nav {
                                ul {
                                    (note_links(&layout.sidebar.links))
                                    li class="p-3" {
                                        a class="text-blue-500" href=(layout.sidebar.new_note_url) {
                                            "Add a new note"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                main class="flex-grow overflow-auto" {
                    div class="p-4 max-w-6xl mx-auto" {
                        article class="prose" {
                            (PreEscaped(layout.content.note.content().as_html()))
                            footer {
                                a href=(layout.content.edit_url) { "Edit this page on GitHub" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn note_links(links: &[NoteLink<'_>]) -> Markup {
    html! {
        @for link in links {
            li class="p-3" {
                a class="text-blue-500" href=(link.href) { (link.title) }
            }
        }
    }
}
