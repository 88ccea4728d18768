//! Export download handlers.
//!
//! Exports always act on the full filtered set, never the visible page.
//! An encoder failure maps to `EXPORT_ERROR` and leaves nothing half
//! written: the payload is built entirely in memory before the response
//! starts.

use axum::extract::{Query, State};
use axum::http::header::{self, HeaderName};
use axum::response::IntoResponse;

use chrono::{NaiveDate, Utc};

use opdreg_core::filter;
use opdreg_db::repositories::RegistrationRepo;

use crate::error::AppResult;
use crate::query::FilterParams;
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_CONTENT_TYPE: &str = "application/pdf";

// ---------------------------------------------------------------------------
// GET /registrations/export/spreadsheet
// ---------------------------------------------------------------------------

/// Download the filtered record set as a spreadsheet.
pub async fn spreadsheet(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let records = RegistrationRepo::list(&state.pool).await?;
    let filtered = filter::filter(&records, &params.into_criteria());

    let bytes = opdreg_export::encode_spreadsheet(&filtered)?;

    tracing::info!(records = filtered.len(), "Spreadsheet export generated");
    Ok((
        download_headers(XLSX_CONTENT_TYPE, "xlsx", Utc::now().date_naive()),
        bytes,
    ))
}

// ---------------------------------------------------------------------------
// GET /registrations/export/pdf
// ---------------------------------------------------------------------------

/// Download the filtered record set as a PDF report.
pub async fn document(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let records = RegistrationRepo::list(&state.pool).await?;
    let filtered = filter::filter(&records, &params.into_criteria());

    let bytes = opdreg_export::encode_document(&filtered, Utc::now())?;

    tracing::info!(records = filtered.len(), "PDF export generated");
    Ok((
        download_headers(PDF_CONTENT_TYPE, "pdf", Utc::now().date_naive()),
        bytes,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn download_headers(
    content_type: &'static str,
    extension: &str,
    date: NaiveDate,
) -> [(HeaderName, String); 2] {
    [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_filename(extension, date)),
        ),
    ]
}

/// Export file name: `registrations_<ISO-date>.<ext>`.
///
/// Deterministic for a given day; same-day exports collide on purpose and
/// overwrite or get suffixed by the client's OS.
fn export_filename(extension: &str, date: NaiveDate) -> String {
    format!("registrations_{}.{extension}", date.format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
