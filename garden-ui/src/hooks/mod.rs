//! Hooks
//!
//! Reactive helpers over browser APIs.

pub mod breakpoint;

pub use breakpoint::{use_breakpoint, Breakpoint};
