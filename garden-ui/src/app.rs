//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::pages::HomeScene;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomeScene />
                <Route path="/notes/:slug" view=HomeScene />
                <Route path="/*any" view=HomeScene />
            </Routes>
        </Router>
    }
}
