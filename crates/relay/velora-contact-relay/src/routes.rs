//! HTTP surface: a single `/contact` route.
//!
//! OPTIONS answers the preflight, POST takes a submission, and anything else
//! is refused. Client-visible error messages come from a fixed set; provider
//! detail stays in the logs.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{options, Router},
    Json,
};
use serde_json::json;

use crate::config::RelayConfig;
use crate::email;
use crate::error::RelayError;
use crate::mailer::Mailer;
use crate::payload::ContactPayload;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, config: RelayConfig) -> Self {
        Self {
            mailer,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contact",
            options(preflight).post(submit).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn submit(State(state): State<AppState>, Json(payload): Json<ContactPayload>) -> Response {
    if payload.validate().is_err() {
        return error_response(StatusCode::BAD_REQUEST, "Campos requeridos faltantes");
    }

    let outbound = email::compose(&state.config, &payload);
    match state.mailer.send(&outbound).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(RelayError::Rejected(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error al enviar el mensaje")
        }
        Err(err) => {
            tracing::error!("contact relay failure: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
