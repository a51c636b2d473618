//! API Client
//!
//! HTTP access to the Garden server.

pub mod client;

pub use client::{fetch_note, fetch_notes, get_api_base};
