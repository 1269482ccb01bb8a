pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::advisor::handlers as advisor;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/login", post(session::handle_login))
        .route("/session/:id/history", get(session::handle_history))
        // Advisor
        .route("/ask", post(advisor::handle_ask))
        .route("/download/:student_id", get(advisor::handle_download))
        // Frontend
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::advisor::catalog::DomainCatalog;
    use crate::advisor::handlers::{EMPTY_QUERY_ANSWER, NOT_FOUND_ANSWER};
    use crate::advisor::skill_fit::KeywordSkillFitScorer;
    use crate::config::Config;
    use crate::dataset::{sample_records, Dataset};
    use crate::session::SessionStore;

    fn test_state(static_dir: PathBuf) -> AppState {
        AppState {
            dataset: Arc::new(Dataset::new(sample_records())),
            catalog: Arc::new(DomainCatalog::default()),
            sessions: SessionStore::new(),
            config: Config {
                dataset_path: PathBuf::from("unused.csv"),
                static_dir,
                users: HashMap::from([("admin".to_string(), "admin123".to_string())]),
                port: 0,
                rust_log: "info".to_string(),
            },
            skill_fit_scorer: Arc::new(KeywordSkillFitScorer),
        }
    }

    fn app() -> (Router, AppState) {
        let state = test_state(PathBuf::from("does-not-exist"));
        (build_router(state.clone()), state)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_request(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let response = get_request(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["students"], 3);
    }

    #[tokio::test]
    async fn test_login_guest_ok_and_error() {
        let (app, _) = app();

        let (status, body) = post_json(app.clone(), "/login", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "guest");
        assert!(body["session_id"].is_string());

        let (status, body) = post_json(
            app.clone(),
            "/login",
            json!({"username": "admin", "password": "admin123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session_id"], "admin");
        assert_eq!(body["message"], "Welcome admin");

        let (status, body) = post_json(
            app,
            "/login",
            json!({"username": "admin", "password": "nope"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body.get("session_id").is_none());
    }

    #[tokio::test]
    async fn test_login_non_json_body_starts_guest_session() {
        let (app, state) = app();
        let response = app
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("username=admin"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(body["status"], "guest");
        assert_eq!(body["message"], "Guest session started");

        let id = body["session_id"].as_str().unwrap();
        assert_eq!(state.sessions.get(id).await.unwrap().user, "guest");
    }

    #[tokio::test]
    async fn test_ask_returns_insights() {
        let (app, state) = app();
        let (status, body) = post_json(
            app,
            "/ask",
            json!({"query": "Aishwarya", "session_id": "s1"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session_id"], "s1");
        assert_eq!(body["insights"]["student_id"], "1001");
        assert_eq!(body["insights"]["performance"]["level"], "Excellent");
        assert_eq!(body["insights"]["radar"]["labels"][0], "SQL");
        assert_eq!(body["insights"]["career_suggestions"][0]["weight"], 25.0);
        assert_eq!(body["answer"], body["insights"]["summary_text"]);

        let history = state.sessions.get("s1").await.unwrap().history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].msg, "Aishwarya");
    }

    #[tokio::test]
    async fn test_ask_accepts_numeric_query() {
        let (app, _) = app();
        let (_, body) = post_json(app, "/ask", json!({"query": 1002})).await;
        assert_eq!(body["insights"]["name"], "Aarav Kumar");
        assert!(body["session_id"].is_string());
    }

    #[tokio::test]
    async fn test_ask_empty_and_unknown() {
        let (app, _) = app();
        let (_, body) = post_json(app.clone(), "/ask", json!({"query": "   "})).await;
        assert_eq!(body["answer"], EMPTY_QUERY_ANSWER);
        assert!(body.get("insights").is_none());

        let (_, body) = post_json(app, "/ask", json!({"query": "zzz"})).await;
        assert_eq!(body["answer"], NOT_FOUND_ANSWER);
    }

    #[tokio::test]
    async fn test_ask_rejects_oversized_query() {
        let (app, _) = app();
        let (status, body) = post_json(app, "/ask", json!({"query": "x".repeat(501)})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ask_rejects_malformed_json() {
        let (app, _) = app();
        let response = app
            .oneshot(
                Request::post("/ask")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_download_pdf() {
        let (app, _) = app();
        let response = get_request(app, "/download/1003").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Priya_Sharma_career_plan.pdf\"; \
             filename*=UTF-8''Priya_Sharma_career_plan.pdf"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_download_sanitizes_awkward_names() {
        let mut records = sample_records();
        records[0].name = "Ann \"Q\"\nLee".to_string();
        let mut state = test_state(PathBuf::from("does-not-exist"));
        state.dataset = Arc::new(Dataset::new(records));

        let response = get_request(build_router(state), "/download/1001").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ann__Q__Lee_career_plan.pdf\"; \
             filename*=UTF-8''Ann__Q__Lee_career_plan.pdf"
        );
    }

    #[tokio::test]
    async fn test_download_unknown_student() {
        let (app, _) = app();
        let response = get_request(app, "/download/0000").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(body["error"]["message"], "Student not found");
    }

    #[tokio::test]
    async fn test_history_endpoint() {
        let (app, state) = app();
        state
            .sessions
            .append("abc", crate::session::Sender::User, "hello")
            .await;

        let response = get_request(app.clone(), "/session/abc/history").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(body["user"], "guest");
        assert_eq!(body["history"][0]["sender"], "user");

        let response = get_request(app, "/session/missing/history").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_served_from_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Elix</h1>").unwrap();
        let app = build_router(test_state(dir.path().to_path_buf()));

        let response = get_request(app.clone(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Elix</h1>");

        let response = get_request(app, "/static/index.html").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
