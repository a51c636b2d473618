//! HTTP API Client
//!
//! Functions for communicating with the Garden JSON API.

use gloo_net::http::Request;

use crate::state::{NoteDetail, NoteList};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090/api/v1";

/// Local storage key overriding the API base
const API_BASE_KEY: &str = "garden_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Detail endpoint for `slug`, encoded as a single path segment
pub fn note_url(api_base: &str, slug: &str) -> String {
    format!("{}/notes/{}", api_base, urlencoding::encode(slug))
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

// ============ API Functions ============

/// Fetch the note list
pub async fn fetch_notes() -> Result<NoteList, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/notes", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one note; `None` when the slug is unknown
pub async fn fetch_note(slug: &str) -> Result<Option<NoteDetail>, String> {
    let api_base = get_api_base();

    let response = Request::get(&note_url(&api_base, slug))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Parse error: {}", e))
}

async fn error_message(response: gloo_net::http::Response) -> String {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}
