pub mod health;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /registrations                        list, create
/// /registrations/{id}                   get by id
/// /registrations/next-number            advisory sequencer preview
/// /registrations/export/spreadsheet     filtered set as .xlsx
/// /registrations/export/pdf             filtered set as .pdf
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/registrations", registration::router())
}
