use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::session::{ChatMessage, LoginOutcome, LoginStatus};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub history: Vec<ChatMessage>,
}

/// POST /login
///
/// Empty credentials, or a body that is not JSON at all, start a guest session.
/// A rejected login answers 401 with the same body shape so the frontend can show
/// `message` either way.
pub async fn handle_login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> (StatusCode, Json<LoginOutcome>) {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let outcome = state
        .sessions
        .login(req.username.trim(), &req.password, &state.config.users)
        .await;

    let status = match outcome.status {
        LoginStatus::Error => StatusCode::UNAUTHORIZED,
        LoginStatus::Ok | LoginStatus::Guest => StatusCode::OK,
    };
    (status, Json(outcome))
}

/// GET /session/:id/history
pub async fn handle_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(HistoryResponse {
        session_id,
        user: session.user,
        created_at: session.created_at,
        history: session.history,
    }))
}
