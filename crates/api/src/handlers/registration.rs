//! Handlers for the `/registrations` resource.
//!
//! The entry form posts a raw field bag; validation happens here (in
//! core) before anything touches the store. The list endpoint fetches the
//! full record set newest-first, filters it in memory, and slices one
//! page; exports live in [`super::export`] and act on the same filtered
//! set without pagination.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use opdreg_core::error::CoreError;
use opdreg_core::filter;
use opdreg_core::form::{self, RegistrationForm};
use opdreg_core::paging::{self, clamp_page, clamp_page_size};
use opdreg_core::registration::Registration;
use opdreg_core::sequence::next_registration_number;
use opdreg_db::models::registration::CreateRegistration;
use opdreg_db::repositories::RegistrationRepo;

use crate::error::{AppError, AppResult};
use crate::query::{FilterParams, PageParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Request body for creating a registration: the raw form fields, plus an
/// optional caller-supplied registration number (the store assigns the
/// next number itself when absent).
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    #[serde(flatten)]
    pub form: RegistrationForm,
    #[serde(default)]
    pub registration_number: Option<i64>,
}

/// One page of filtered registrations plus paging metadata.
#[derive(Debug, Serialize)]
pub struct RegistrationPage {
    pub data: Vec<Registration>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Records matching the filter (across all pages).
    pub filtered_records: usize,
    /// Records in the store before filtering.
    pub total_records: usize,
}

/// Advisory next-number preview.
#[derive(Debug, Serialize)]
pub struct NextNumberResponse {
    pub registration_number: i64,
    /// True when the store could not be read and the preview fell back
    /// to the start of the sequence.
    pub fallback: bool,
}

// ---------------------------------------------------------------------------
// POST /registrations
// ---------------------------------------------------------------------------

/// Validate the submitted form and insert a new registration.
///
/// A validation failure returns 422 with field-keyed messages and never
/// reaches the store; the client keeps its entered values.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRegistrationRequest>,
) -> AppResult<impl IntoResponse> {
    let new = form::validate(&body.form).map_err(AppError::Validation)?;

    let input = CreateRegistration::from_new(new, body.registration_number);
    let registration = RegistrationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        registration_number = registration.registration_number,
        department = %registration.department,
        patient_type = %registration.patient_type,
        "Registration created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

// ---------------------------------------------------------------------------
// GET /registrations
// ---------------------------------------------------------------------------

/// List registrations: fetch newest-first, filter, then slice one page.
///
/// The requested page is clamped to `[1, max(total_pages, 1)]`, so an
/// out-of-range request shows the nearest valid page rather than an empty
/// window.
pub async fn list(
    State(state): State<AppState>,
    Query(filter_params): Query<FilterParams>,
    Query(page_params): Query<PageParams>,
) -> AppResult<Json<RegistrationPage>> {
    let records = RegistrationRepo::list(&state.pool).await?;
    let total_records = records.len();

    let criteria = filter_params.into_criteria();
    let filtered = filter::filter(&records, &criteria);
    let filtered_records = filtered.len();

    let page_size = clamp_page_size(page_params.page_size);
    let total_pages = filtered_records.div_ceil(page_size);
    let page = clamp_page(page_params.page, total_pages);
    let sliced = paging::paginate(&filtered, page_size, page);

    tracing::debug!(
        total_records,
        filtered_records,
        page,
        filtering = criteria.is_active(),
        "Listed registrations"
    );

    Ok(Json(RegistrationPage {
        data: sliced.window,
        page,
        page_size,
        total_pages: sliced.total_pages,
        filtered_records,
        total_records,
    }))
}

// ---------------------------------------------------------------------------
// GET /registrations/{id}
// ---------------------------------------------------------------------------

/// Get a single registration by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let registration = RegistrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;
    Ok(Json(DataResponse { data: registration }))
}

// ---------------------------------------------------------------------------
// GET /registrations/next-number
// ---------------------------------------------------------------------------

/// Preview the next registration number.
///
/// Advisory and display-only: nothing is reserved, and the store assigns
/// the persisted number at insert time. A store failure is recoverable
/// here -- the preview falls back to the start of the sequence and the
/// response says so.
pub async fn next_number(State(state): State<AppState>) -> Json<DataResponse<NextNumberResponse>> {
    match RegistrationRepo::max_registration_number(&state.pool).await {
        Ok(max) => Json(DataResponse {
            data: NextNumberResponse {
                registration_number: next_registration_number(max),
                fallback: false,
            },
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Could not read max registration number; previewing 1");
            Json(DataResponse {
                data: NextNumberResponse {
                    registration_number: next_registration_number(None),
                    fallback: true,
                },
            })
        }
    }
}
