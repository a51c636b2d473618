//! Menu Component
//!
//! Header, sidebar and main regions. The sidebar is always shown on static
//! (wide) layouts and follows `is_closed` otherwise.

use leptos::*;

/// Whether the sidebar is shown for a layout mode and menu flag
pub fn sidebar_visible(is_static: bool, is_closed: bool) -> bool {
    is_static || !is_closed
}

/// Collapsible sidebar layout
#[component]
pub fn Menu(
    #[prop(into)]
    is_static: Signal<bool>,
    is_closed: ReadSignal<bool>,
    set_closed: WriteSignal<bool>,
    header: View,
    sidebar: View,
    children: Children,
) -> impl IntoView {
    let visible = move || sidebar_visible(is_static.get(), is_closed.get());

    view! {
        <div class="flex flex-col h-screen">
            <header class="flex items-center h-14 border-b">
                // Toggle only on collapsible layouts
                <Show when=move || !is_static.get()>
                    <button
                        class="p-3"
                        aria-controls="sidebar"
                        aria-expanded=move || visible().to_string()
                        on:click=move |_| set_closed.update(|closed| *closed = !*closed)
                    >
                        {move || if visible() { "Close menu" } else { "Open menu" }}
                    </button>
                </Show>
                {header}
            </header>

            <div class="flex flex-grow">
                <aside id="sidebar" class="flex w-64" class:hidden=move || !visible()>
                    {sidebar}
                </aside>
                <main class="flex-grow overflow-auto">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_layout_ignores_flag() {
        assert!(sidebar_visible(true, true));
        assert!(sidebar_visible(true, false));
    }

    #[test]
    fn test_collapsible_layout_follows_flag() {
        let mut is_closed = true;
        for _ in 0..4 {
            assert_eq!(sidebar_visible(false, is_closed), !is_closed);
            is_closed = !is_closed;
        }
    }
}
