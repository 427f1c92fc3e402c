//! REST API Server for the triage engine
//!
//! Thin transport over Analyze / Process / Summarize. No auth, no storage.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::engine::TriageEngine;
use crate::error::TriageError;
use crate::memory::{chat_title, should_refresh_summary, ChatMessage};
use crate::models::ProcessOutcome;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
    pub is_crisis: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SummarizeRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub title: Option<String>,
    pub refresh_due: bool,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Failure that still carries a usable payload
    pub fn fallback<T: Serialize>(data: T, message: String) -> Self {
        Self {
            success: false,
            data: serde_json::to_value(data).ok(),
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<TriageEngine>,
}

fn error_response(err: TriageError) -> (StatusCode, Json<ApiResponse>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Analysis Endpoints
/// =============================

async fn analyze(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let message = req.message.unwrap_or_default();

    match state.engine.analyze(&message) {
        Ok(result) => (StatusCode::OK, Json(ApiResponse::success(result))),
        Err(e) => error_response(e),
    }
}

async fn process(
    State(state): State<ApiState>,
    Json(req): Json<ProcessRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let message = req.message.unwrap_or_default();
    let user_id = req
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| "anonymous".to_string());

    info!("Received process request from {}", user_id);

    match state.engine.process(&message, &user_id, req.is_crisis) {
        Ok(ProcessOutcome::Completed(result)) => {
            (StatusCode::OK, Json(ApiResponse::success(result)))
        }
        // Fault details stay in the log; the client only sees the id
        Ok(ProcessOutcome::Fallback { result, fault }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::fallback(
                result,
                format!("Internal error (fault id {})", fault.fault_id),
            )),
        ),
        Err(e) => error_response(e),
    }
}

async fn summarize(
    State(state): State<ApiState>,
    Json(req): Json<SummarizeRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let title = req
        .messages
        .iter()
        .find(|m| m.is_user())
        .map(|m| chat_title(&m.content));

    let response = SummaryResponse {
        summary: state.engine.summarize(&req.messages),
        title,
        refresh_due: should_refresh_summary(req.messages.len()),
    };

    (StatusCode::OK, Json(ApiResponse::success(response)))
}

/// =============================
/// Router
/// =============================

pub fn create_router(engine: Arc<TriageEngine>) -> Router {
    let state = ApiState { engine };

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/process", post(process))
        .route("/api/summarize", post(summarize))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    engine: Arc<TriageEngine>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(engine);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
