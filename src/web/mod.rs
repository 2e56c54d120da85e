//! HTTP front-end.
//!
//! Server-rendered practice pages plus a small JSON evaluation API. The
//! current item of each section travels in the query string (`?prompt=`,
//! `?exercise=`, `?question=`), so the server itself keeps no per-user state.
//!
//! # Endpoints
//!
//! - `GET /`: home page
//! - `GET /speaking`: speaking prompt
//! - `GET|POST /writing`: writing task and feedback
//! - `GET|POST /listening`: listening exercise and feedback
//! - `GET|POST /reading`: reading question and feedback
//! - `POST /api/evaluate/{writing,listening,reading}`: feedback as JSON
//! - `GET /api/health`

mod handlers;
mod templates;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use minijinja::{Environment, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::data::ContentStore;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct WebState {
    content: Arc<ContentStore>,
    templates: Arc<Environment<'static>>,
}

impl WebState {
    pub fn new(content: Arc<ContentStore>) -> Result<Self, WebError> {
        let templates = templates::environment().map_err(WebError::Templates)?;
        Ok(Self {
            content,
            templates: Arc::new(templates),
        })
    }

    fn render(&self, name: &'static str, ctx: Value) -> Result<Html<String>, WebError> {
        self.templates
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map(Html)
            .map_err(|source| WebError::Render {
                template: name,
                source,
            })
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("failed to load templates: {0}")]
    Templates(#[source] minijinja::Error),
    #[error("failed to render {template}: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Something went wrong</h1>"),
        )
            .into_response()
    }
}

/// Build the axum router with all routes.
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/speaking", get(handlers::speaking))
        .route(
            "/writing",
            get(handlers::writing).post(handlers::submit_writing),
        )
        .route(
            "/listening",
            get(handlers::listening).post(handlers::submit_listening),
        )
        .route(
            "/reading",
            get(handlers::reading).post(handlers::submit_reading),
        )
        .route("/api/evaluate/writing", post(handlers::api_evaluate_writing))
        .route(
            "/api/evaluate/listening",
            post(handlers::api_evaluate_listening),
        )
        .route("/api/evaluate/reading", post(handlers::api_evaluate_reading))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the practice pages until Ctrl+C.
pub async fn serve(addr: &str, state: WebState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Web app listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down web app");
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::data::builtin;
    use crate::evaluator::Feedback;

    fn test_router() -> Router {
        let state = WebState::new(Arc::new(builtin().clone())).unwrap();
        build_router(state)
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_text(response).await)
    }

    async fn post_form(uri: &str, form: &str) -> (StatusCode, String) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        (status, body_text(response).await)
    }

    async fn post_json(uri: &str, json: serde_json::Value) -> Feedback {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, html) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Practice regularly!"));
        assert!(html.contains("href=\"/listening\""));
    }

    #[tokio::test]
    async fn test_speaking_rotates() {
        let (_, first) = get_page("/speaking").await;
        assert!(first.contains("solve a problem creatively"));
        assert!(first.contains("/speaking?prompt=1"));

        let (_, last) = get_page("/speaking?prompt=3").await;
        assert!(last.contains("working from home"));
        assert!(last.contains("/speaking?prompt=0"));
    }

    #[tokio::test]
    async fn test_writing_index_wraps() {
        let (_, zero) = get_page("/writing?prompt=0").await;
        let (_, two) = get_page("/writing?prompt=2").await;
        assert_eq!(zero, two);
        assert!(zero.contains("Summarize Written Text"));
    }

    #[tokio::test]
    async fn test_malformed_index_falls_back() {
        let (status, html) = get_page("/reading?question=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("urban greening"));

        let (status, html) = get_page("/reading?question=-1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("business briefing"));
    }

    #[tokio::test]
    async fn test_writing_blank_submission() {
        let (status, html) = post_form("/writing?prompt=1", "response=+++").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please write your response before evaluating."));
    }

    #[tokio::test]
    async fn test_writing_feedback() {
        let (_, html) = post_form(
            "/writing?prompt=1",
            "response=The+introduction+is+short+however+the+conclusion+therefore+matters",
        )
        .await;
        assert!(html.contains("Word count: 9 (aim for 200-300)."));
        assert!(html.contains("Good cohesion with linking words."));
        assert!(html.contains("Keyword coverage: 2/3 core ideas mentioned."));
        assert!(html.contains("the conclusion therefore matters</textarea>"));
    }

    #[tokio::test]
    async fn test_listening_feedback() {
        let (_, html) = post_form("/listening", "summary=Urban+green+areas").await;
        assert!(html.contains("Keyword coverage: 2/3."));
        assert!(html.contains("Add details about: cooling"));

        let (_, html) = post_form("/listening?exercise=1", "summary=").await;
        assert!(html.contains("Write a short summary before evaluating."));
    }

    #[tokio::test]
    async fn test_reading_feedback() {
        let (_, html) = post_form("/reading", "choice=1").await;
        assert!(html.contains("Correct! Urban greening cools cities"));
        assert!(html.contains("value=\"1\" checked"));

        let (_, html) = post_form("/reading", "choice=0").await;
        assert!(html.contains("Not quite. Urban greening cools cities"));

        let (_, html) = post_form("/reading", "").await;
        assert!(html.contains("Please select an answer before submitting."));
    }

    #[tokio::test]
    async fn test_reading_negative_choice_is_wrong() {
        let (status, html) = post_form("/reading", "choice=-1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Not quite. Urban greening cools cities"));
        assert!(!html.contains("Please select an answer"));
        assert!(!html.contains("checked"));
    }

    #[tokio::test]
    async fn test_oversized_index_wraps() {
        let (status, html) = get_page("/listening?exercise=100000000000000000001").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Business Briefing"));
        assert!(html.contains("/listening?exercise=0"));
    }

    #[tokio::test]
    async fn test_api_evaluate() {
        let feedback = post_json(
            "/api/evaluate/listening",
            serde_json::json!({ "exercise": 1, "text": "pilot productivity feedback" }),
        )
        .await;
        assert_eq!(feedback.lines()[1], "Keyword coverage: 3/3.");

        let feedback = post_json(
            "/api/evaluate/reading",
            serde_json::json!({ "question": 3, "choice": 1 }),
        )
        .await;
        assert!(feedback.lines()[0].starts_with("Correct! Managers will track"));

        let feedback = post_json(
            "/api/evaluate/writing",
            serde_json::json!({ "prompt": 0, "text": "" }),
        )
        .await;
        assert_eq!(
            feedback.lines(),
            ["Please write your response before evaluating."]
        );
    }

    #[tokio::test]
    async fn test_api_normalizes_malformed_input() {
        let feedback = post_json(
            "/api/evaluate/reading",
            serde_json::json!({ "question": "abc", "choice": 1 }),
        )
        .await;
        assert!(feedback.lines()[0].starts_with("Correct! Urban greening cools cities"));

        let feedback = post_json(
            "/api/evaluate/reading",
            serde_json::json!({ "question": 0, "choice": -1 }),
        )
        .await;
        assert!(feedback.lines()[0].starts_with("Not quite. Urban greening cools cities"));

        let feedback = post_json(
            "/api/evaluate/reading",
            serde_json::json!({ "question": "-1", "choice": "1" }),
        )
        .await;
        assert!(feedback.lines()[0].starts_with("Correct! Managers will track"));

        let feedback = post_json(
            "/api/evaluate/listening",
            serde_json::json!({ "exercise": "x", "text": "urban green cooling" }),
        )
        .await;
        assert_eq!(feedback.lines()[1], "Keyword coverage: 3/3.");

        let feedback = post_json(
            "/api/evaluate/writing",
            serde_json::json!({ "prompt": [1], "text": "" }),
        )
        .await;
        assert_eq!(
            feedback.lines(),
            ["Please write your response before evaluating."]
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get_page("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
