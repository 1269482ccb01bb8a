//! Axum route handlers for the advisor API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::advisor::insights::{build_insights, Insights};
use crate::errors::AppError;
use crate::report::{attachment_disposition, plan_filename, render_career_plan};
use crate::session::Sender;
use crate::state::AppState;

pub const EMPTY_QUERY_ANSWER: &str = "Please send a Student ID, Name, or skill.";
pub const MAX_QUERY_CHARS: usize = 500;
pub const NOT_FOUND_ANSWER: &str =
    "I couldn’t find your profile. Please tell me your Student ID, Name, or Skills.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
    pub session_id: String,
}

/// Student ids are often typed as bare numbers by API clients.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ask
///
/// Looks up a profile by id, name, domain, or mentioned skill and returns the
/// full insight payload. Both sides of the exchange are recorded in the session.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let query = request.query.trim().to_string();
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::Validation(format!(
            "query must be at most {MAX_QUERY_CHARS} characters"
        )));
    }

    let session_id = state.sessions.ensure(request.session_id.as_deref()).await;
    state
        .sessions
        .append(&session_id, Sender::User, query.clone())
        .await;

    if query.is_empty() {
        return Ok(Json(AskResponse {
            answer: EMPTY_QUERY_ANSWER.to_string(),
            insights: None,
            session_id,
        }));
    }

    let Some(record) = state.dataset.find_profile(&query) else {
        info!("No profile matched query in session {session_id}");
        state
            .sessions
            .append(&session_id, Sender::Elix, NOT_FOUND_ANSWER)
            .await;
        return Ok(Json(AskResponse {
            answer: NOT_FOUND_ANSWER.to_string(),
            insights: None,
            session_id,
        }));
    };

    let insights = build_insights(record, &state.catalog, state.skill_fit_scorer.as_ref());
    info!(
        "Matched student {} for session {session_id}",
        insights.student_id
    );
    state
        .sessions
        .append(&session_id, Sender::Elix, insights.summary_text.clone())
        .await;

    Ok(Json(AskResponse {
        answer: insights.summary_text.clone(),
        insights: Some(insights),
        session_id,
    }))
}

/// GET /download/:student_id
///
/// Streams the student's career plan as a PDF attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .dataset
        .find_by_id(&student_id)
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let insights = build_insights(record, &state.catalog, state.skill_fit_scorer.as_ref());
    let filename = plan_filename(&insights.name);

    // PDF assembly and compression are CPU-bound.
    let pdf = tokio::task::spawn_blocking(move || render_career_plan(&insights))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!("Generated {filename} ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment_disposition(&filename)),
        ],
        Bytes::from(pdf),
    ))
}
