//! Responsive layout
//!
//! - **breakpoint**: named width thresholds and the `BreakpointObserver` contract
//! - **menu**: the collapsible sidebar view model

pub mod breakpoint;
pub mod menu;

pub use breakpoint::{Breakpoint, BreakpointError, BreakpointObserver, Viewport};
pub use menu::{MenuLayout, MenuState, MenuToggle, MenuViewModel, UiState};
