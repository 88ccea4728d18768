//! Route definitions for the `/registrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{export, registration};
use crate::state::AppState;

/// Routes mounted at `/registrations`.
///
/// ```text
/// GET  /                     -> list (filter + pagination params)
/// POST /                     -> create
/// GET  /next-number          -> next_number
/// GET  /export/spreadsheet   -> export::spreadsheet (filter params)
/// GET  /export/pdf           -> export::document (filter params)
/// GET  /{id}                 -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(registration::list).post(registration::create))
        .route("/next-number", get(registration::next_number))
        .route("/export/spreadsheet", get(export::spreadsheet))
        .route("/export/pdf", get(export::document))
        .route("/{id}", get(registration::get_by_id))
}
