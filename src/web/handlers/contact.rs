//! Public handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::web::dto::{
    ApiResponse, ContactRequest, HealthResponse, SubmitResponse, ValidatedJson,
};
use crate::web::error::ApiError;

/// GET / - Health check.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: format!("{} Backend Running", state.service_name),
    })
}

/// GET /ping - Keep-alive check.
pub async fn ping() -> &'static str {
    "pong"
}

/// POST /api/contact - Submit an inquiry.
///
/// Responds as soon as the inquiry is stored; emails go out afterwards.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiResponse<SubmitResponse>>, ApiError> {
    let inquiry = state.workflow.submit(&req.into()).await?;

    Ok(Json(ApiResponse::new(SubmitResponse {
        id: inquiry.id.to_string(),
        message: "Message received successfully".to_string(),
    })))
}
