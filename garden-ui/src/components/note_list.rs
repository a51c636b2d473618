//! Note List Component
//!
//! Plain list of links to every note.

use leptos::*;
use leptos_router::*;

use crate::state::NoteSummary;

/// Link list over the notes, in server order
#[component]
pub fn NoteList(notes: Vec<NoteSummary>) -> impl IntoView {
    view! {
        <ul>
            {notes
                .into_iter()
                .map(|note| view! { <NoteLink note=note /> })
                .collect_view()}
        </ul>
    }
}

/// Single note link
#[component]
pub fn NoteLink(note: NoteSummary) -> impl IntoView {
    view! {
        <li class="p-3">
            <A href=note.href class="text-blue-500">
                {note.title}
            </A>
        </li>
    }
}
