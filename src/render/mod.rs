//! Server-side rendering of scene views

pub mod html;

pub use html::{render_detail, render_index, render_page, PageContext};
