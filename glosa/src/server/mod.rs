//! HTTP boundary for the advisory service.
//!
//! Routes:
//! - `GET  /`              liveness message
//! - `GET  /api/junctions` all known junctions
//! - `POST /api/advisory`  compute an advisory
//!
//! Errors are returned as `{"error": ..., "details": ...}` with
//! 400 (invalid input), 404 (unknown junction) or 500 (no predictor answered).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::junction::Junction;
use crate::service::{AdvisoryRequest, AdvisoryResponse, AdvisoryService, ServiceError};

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServiceError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid advisory request".to_string(),
                    details: Some(msg.clone()),
                },
            ),
            ServiceError::JunctionNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Junction not found".to_string(),
                    details: None,
                },
            ),
            ServiceError::PredictionUnavailable(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to compute advisory".to_string(),
                    details: Some(e.to_string()),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the router over a shared service.
///
/// Any origin may call the API so a browser dashboard can reach it.
pub fn router(service: Arc<AdvisoryService>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/junctions", get(junctions_handler))
        .route("/api/advisory", post(advisory_handler))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serves until the cancellation token fires.
pub async fn serve(
    service: Arc<AdvisoryService>,
    addr: SocketAddr,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Advisory server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Advisory server stopped");
    Ok(())
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "GLOSA advisory service is running" }))
}

async fn junctions_handler(State(service): State<Arc<AdvisoryService>>) -> Json<Vec<Junction>> {
    Json(service.junctions())
}

async fn advisory_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(request): Json<AdvisoryRequest>,
) -> Result<Json<AdvisoryResponse>, ServiceError> {
    match service.advise(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            match &e {
                ServiceError::PredictionUnavailable(_) => {
                    error!(junction_id = %request.junction_id, error = %e, "Advisory failed")
                }
                _ => warn!(junction_id = %request.junction_id, error = %e, "Advisory rejected"),
            }
            Err(e)
        }
    }
}
