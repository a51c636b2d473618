//! Page Routes
//!
//! Server-rendered HTML for the home scene.
//!
//! - GET /, /notes, /notes/ - Note index
//! - GET /notes/:slug - Note detail, or the index when the slug is unknown
//!
//! Query parameters:
//! - `menu=open|closed` - collapsible sidebar state
//! - `vw=<px>` - viewport width, overriding the client hint headers
//!
//! The query string is read leniently: the first occurrence of a key wins
//! and anything unparseable is ignored, so a page always renders.

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, HeaderName},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::{MenuState, UiState, Viewport};
use crate::render::{render_page, PageContext};
use crate::scene::Route;

/// Client hint carrying the layout viewport width
const VIEWPORT_WIDTH_HINT: &str = "sec-ch-viewport-width";
/// Legacy client hint name
const LEGACY_VIEWPORT_WIDTH_HINT: &str = "viewport-width";

/// Query parameters accepted by page routes
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub menu: Option<String>,
    pub vw: Option<String>,
}

impl PageQuery {
    /// Parse a raw query string, keeping the first value of each key
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for pair in raw.unwrap_or_default().split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "menu" => &mut query.menu,
                "vw" => &mut query.vw,
                _ => continue,
            };
            if slot.is_none() {
                let value = value.replace('+', " ");
                *slot = urlencoding::decode(&value).ok().map(|v| v.into_owned());
            }
        }

        query
    }
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let query = PageQuery::parse(query.as_deref());
    render_home(&state, Route::index(), "/", &headers, &query)
}

/// GET /notes/:slug
pub async fn note(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let query = PageQuery::parse(query.as_deref());
    let path = state.scene.links().note_href(&slug);
    render_home(&state, Route::note(slug), &path, &headers, &query)
}

fn render_home(
    state: &AppState,
    route: Route,
    path: &str,
    headers: &HeaderMap,
    query: &PageQuery,
) -> Response {
    let width_override = query.vw.as_deref().and_then(Viewport::parse_width);
    let viewport = viewport_from(headers, width_override, state.layout.default_viewport_width);
    let ui = UiState::observe(
        &viewport,
        state.layout.static_breakpoint,
        MenuState::from_query(query.menu.as_deref()),
    );

    let view = state.scene.render(&route, ui);
    tracing::debug!(
        path = %path,
        detail = view.is_detail(),
        viewport_width = viewport.width(),
        static_layout = ui.is_static_layout,
        "Rendering home scene"
    );

    let page = PageContext::new(&state.site_title, path).viewport_width(width_override);
    let html = render_page(&view, &page);

    (
        [
            (HeaderName::from_static("accept-ch"), "Sec-CH-Viewport-Width"),
            (header::VARY, "Sec-CH-Viewport-Width"),
        ],
        Html(html),
    )
        .into_response()
}

/// Pick the viewport width: explicit override, then client hints, then default
fn viewport_from(headers: &HeaderMap, width_override: Option<u32>, default_width: u32) -> Viewport {
    let hinted = || {
        [VIEWPORT_WIDTH_HINT, LEGACY_VIEWPORT_WIDTH_HINT]
            .iter()
            .filter_map(|name| headers.get(*name))
            .filter_map(|value| value.to_str().ok())
            .find_map(Viewport::parse_width)
    };

    Viewport::new(width_override.or_else(hinted).unwrap_or(default_width))
}
