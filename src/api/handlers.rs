//! HTTP request handlers for the Vacation Allocation Engine API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::CandidateRange;

use super::request::CreateVacationRangeRequest;
use super::response::{ApiError, ApiErrorResponse, VacationDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacation-days", get(vacation_days_handler))
        .route("/vacations/:employee_id", get(get_all_handler))
        .route("/vacations/:employee_id/default", post(create_default_handler))
        .route(
            "/vacations/:employee_id/:period_year",
            get(get_on_period_handler)
                .post(create_on_period_handler)
                .put(update_on_period_handler),
        )
        .with_state(state)
}

/// Handler for GET /vacation-days.
async fn vacation_days_handler(
    State(state): State<AppState>,
) -> Result<Json<VacationDaysResponse>, ApiErrorResponse> {
    let vacation_days = state.service().vacation_quota()?;
    Ok(Json(VacationDaysResponse { vacation_days }))
}

/// Handler for GET /vacations/{employee_id}/{period_year}.
async fn get_on_period_handler(
    State(state): State<AppState>,
    Path((employee_id, period_year)): Path<(String, i32)>,
) -> impl IntoResponse {
    let ranges = state
        .service()
        .get_for_employee_on_period(&employee_id, period_year);
    Json(ranges)
}

/// Handler for GET /vacations/{employee_id}.
///
/// Returns the employee's ranges grouped by period year.
async fn get_all_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let grouped = state.service().get_all_for_employee(&employee_id);
    Json(grouped)
}

/// Handler for POST /vacations/{employee_id}/{period_year}.
async fn create_on_period_handler(
    State(state): State<AppState>,
    Path((employee_id, period_year)): Path<(String, i32)>,
    payload: Result<Json<Vec<CreateVacationRangeRequest>>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        period_year,
        "Processing vacation create request"
    );

    let candidates = match parse_ranges(payload, correlation_id) {
        Ok(candidates) => candidates,
        Err(response) => return response.into_response(),
    };

    match state
        .service()
        .create_for_employee_on_period(&employee_id, period_year, &candidates)
    {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Vacation create failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /vacations/{employee_id}/{period_year}.
async fn update_on_period_handler(
    State(state): State<AppState>,
    Path((employee_id, period_year)): Path<(String, i32)>,
    payload: Result<Json<Vec<CreateVacationRangeRequest>>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        period_year,
        "Processing vacation update request"
    );

    let candidates = match parse_ranges(payload, correlation_id) {
        Ok(candidates) => candidates,
        Err(response) => return response.into_response(),
    };

    match state
        .service()
        .update_for_employee_on_period(&employee_id, period_year, &candidates)
    {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Vacation update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /vacations/{employee_id}/default.
async fn create_default_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing default vacation request"
    );

    match state.service().create_default_for_employee(&employee_id) {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Default vacation allocation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Turns a JSON body into candidate ranges, mapping rejections to 400s.
fn parse_ranges(
    payload: Result<Json<Vec<CreateVacationRangeRequest>>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<Vec<CandidateRange>, ApiErrorResponse> {
    match payload {
        Ok(Json(requests)) => Ok(requests.into_iter().map(Into::into).collect()),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            let error = match rejection {
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                other => ApiError::malformed_json(other.body_text()),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}
