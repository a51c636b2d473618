//! Home Scene
//!
//! Resolves the `slug` route parameter to a note. A resolved note is shown
//! inside the menu layout; anything else falls back to the plain note list.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Loading, Menu, NoteList};
use crate::hooks::{use_breakpoint, Breakpoint};
use crate::state::{NoteDetail, NoteList as NoteListData};

/// Note index / note detail scene
#[component]
pub fn HomeScene() -> impl IntoView {
    let (is_closed, set_closed) = create_signal(true);

    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned());

    let notes = create_resource(|| (), |_| async move { api::fetch_notes().await });

    // Unknown slugs and fetch failures both resolve to the index
    let note = create_resource(slug, |slug| async move {
        let slug = slug?;
        match api::fetch_note(&slug).await {
            Ok(note) => note,
            Err(e) => {
                web_sys::console::warn_1(&format!("Failed to load note '{}': {}", slug, e).into());
                None
            }
        }
    });

    let breakpoint = Signal::derive(move || {
        notes
            .get()
            .and_then(Result::ok)
            .and_then(|list| Breakpoint::from_name(&list.static_breakpoint))
            .unwrap_or(Breakpoint::Sm)
    });
    let is_static = use_breakpoint(breakpoint);

    let content = move || {
        let list = match notes.get() {
            Some(Ok(list)) => list,
            Some(Err(e)) => {
                return view! { <p class="p-3 text-red-500">{e}</p> }.into_view();
            }
            None => return view! { <Loading /> }.into_view(),
        };

        match note.get() {
            Some(Some(detail)) => view! {
                <NoteDetailView
                    list=list
                    detail=detail
                    is_static=is_static
                    is_closed=is_closed
                    set_closed=set_closed
                />
            }
            .into_view(),
            Some(None) => view! { <NoteList notes=list.notes /> }.into_view(),
            None => view! { <Loading /> }.into_view(),
        }
    };

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {content}
        </Suspense>
    }
}

/// A note inside the menu chrome
#[component]
fn NoteDetailView(
    list: NoteListData,
    detail: NoteDetail,
    is_static: Signal<bool>,
    is_closed: ReadSignal<bool>,
    set_closed: WriteSignal<bool>,
) -> impl IntoView {
    let header = view! {
        <div class="flex items-center justify-between flex-grow px-3">
            <h1 class="text-lg">{detail.title.clone()}</h1>
            <a class="text-blue-500" href=list.links.source_url.clone()>"Source"</a>
        </div>
    }
    .into_view();

    let sidebar = view! {
        <div class="relative flex-grow py-4 border-r">
            <nav>
                <NoteList notes=list.notes.clone() />
                <ul>
                    <li class="p-3">
                        <a class="text-blue-500" href=list.links.new_note_url.clone()>
                            "Add a new note"
                        </a>
                    </li>
                </ul>
            </nav>
        </div>
    }
    .into_view();

    view! {
        <Menu
            is_static=is_static
            is_closed=is_closed
            set_closed=set_closed
            header=header
            sidebar=sidebar
        >
            <div class="p-4 max-w-6xl mx-auto">
                <article class="prose">
                    <div inner_html=detail.html.clone() />
                    <footer>
                        <a href=detail.edit_url.clone()>"Edit this page on GitHub"</a>
                    </footer>
                </article>
            </div>
        </Menu>
    }
}
