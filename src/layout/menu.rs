//! Disclosure menu view model
//!
//! Composes the header, sidebar and main regions of a page. On wide
//! viewports the sidebar is static and always shown; on narrow ones it is
//! collapsible and follows the open/closed flag.

use super::breakpoint::{Breakpoint, BreakpointObserver};

/// Open/closed flag for the collapsible sidebar
///
/// Owned by the scene; the view model only flips it through `toggle` or
/// `set_closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuState {
    is_closed: bool,
}

impl Default for MenuState {
    /// The menu starts closed
    fn default() -> Self {
        Self { is_closed: true }
    }
}

impl MenuState {
    pub fn new(is_closed: bool) -> Self {
        Self { is_closed }
    }

    pub fn open() -> Self {
        Self::new(false)
    }

    pub fn closed() -> Self {
        Self::new(true)
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn set_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    pub fn toggle(&mut self) {
        self.is_closed = !self.is_closed;
    }

    /// The state a toggle would produce
    pub fn toggled(self) -> Self {
        Self::new(!self.is_closed)
    }

    /// Parse the `menu` query parameter; anything other than `open` is closed
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("open") => Self::open(),
            _ => Self::closed(),
        }
    }

    /// Value for the `menu` query parameter
    pub fn as_query(&self) -> &'static str {
        if self.is_closed {
            "closed"
        } else {
            "open"
        }
    }
}

/// Per-render UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub menu: MenuState,
    /// Wide viewport: sidebar pinned open
    pub is_static_layout: bool,
}

impl UiState {
    pub fn new(menu: MenuState, is_static_layout: bool) -> Self {
        Self {
            menu,
            is_static_layout,
        }
    }

    /// Derive the layout mode from a viewport observer
    pub fn observe(
        observer: &impl BreakpointObserver,
        static_breakpoint: Breakpoint,
        menu: MenuState,
    ) -> Self {
        Self::new(menu, observer.is_at_least(static_breakpoint))
    }
}

/// Toggle affordance shown on collapsible layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuToggle {
    /// Whether the sidebar is currently shown
    pub expanded: bool,
    /// State after activating the toggle
    pub next: MenuState,
}

/// Composed page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout<H, S, C> {
    pub header: H,
    pub sidebar: S,
    pub content: C,
    pub sidebar_visible: bool,
    /// `None` on static layouts
    pub toggle: Option<MenuToggle>,
}

/// Header, sidebar and main content plus the state that decides which
/// regions are shown
#[derive(Debug, Clone)]
pub struct MenuViewModel<H, S, C> {
    is_static: bool,
    state: MenuState,
    header: H,
    sidebar: S,
    content: C,
}

impl<H, S, C> MenuViewModel<H, S, C> {
    pub fn new(ui: UiState, header: H, sidebar: S, content: C) -> Self {
        Self {
            is_static: ui.is_static_layout,
            state: ui.menu,
            header,
            sidebar,
            content,
        }
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn sidebar_visible(&self) -> bool {
        self.is_static || !self.state.is_closed()
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn set_closed(&mut self, is_closed: bool) {
        self.state.set_closed(is_closed);
    }

    pub fn compose(self) -> MenuLayout<H, S, C> {
        let sidebar_visible = self.sidebar_visible();
        let toggle = (!self.is_static).then(|| MenuToggle {
            expanded: sidebar_visible,
            next: self.state.toggled(),
        });

        MenuLayout {
            header: self.header,
            sidebar: self.sidebar,
            content: self.content,
            sidebar_visible,
            toggle,
        }
    }
}
