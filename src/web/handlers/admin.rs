//! Administrator handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::inquiry::InquiryId;
use crate::web::dto::{
    ApiResponse, ChangePasswordRequest, CredentialsRequest, DeleteResponse, InquiryResponse,
    LoginResponse, MessageResponse, RegisterResponse, ReplyRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::BearerToken;

/// POST /api/admin/register - Create the administrator account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), ApiError> {
    let id = state.workflow.register(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(RegisterResponse {
            id,
            message: "Admin account created".to_string(),
        })),
    ))
}

/// POST /api/admin/login - Exchange credentials for a session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let issued = state.workflow.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::new(issued.into())))
}

/// GET /api/admin/contacts - List inquiries, newest first.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
) -> Result<Json<ApiResponse<Vec<InquiryResponse>>>, ApiError> {
    let inquiries = state.workflow.list(token.as_str()).await?;
    Ok(Json(ApiResponse::new(
        inquiries.into_iter().map(InquiryResponse::from).collect(),
    )))
}

/// POST /api/admin/reply/:id - Email a reply to the submitter.
pub async fn reply(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ReplyRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .workflow
        .reply(token.as_str(), &InquiryId::from(id), &req.reply_message)
        .await?;

    Ok(Json(ApiResponse::new(MessageResponse::new(
        "Reply email sent successfully",
    ))))
}

/// DELETE /api/admin/contact/:id - Delete an inquiry and notify the submitter.
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    let outcome = state
        .workflow
        .delete(token.as_str(), &InquiryId::from(id))
        .await?;

    Ok(Json(ApiResponse::new(outcome.into())))
}

/// POST /api/admin/password - Change the administrator password.
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .workflow
        .change_secret(token.as_str(), &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::new(MessageResponse::new("Password updated"))))
}
