mod routes;

pub use routes::create_router;

use crate::config::RenderConfig;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use briefme_core::{BriefMeError, DashboardStore};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The store is not `Sync` (its memo cell), so every handler takes the lock.
    pub store: Arc<Mutex<DashboardStore>>,
    pub render: RenderConfig,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(store: DashboardStore, render: RenderConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            render,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn store(&self) -> AppResult<MutexGuard<'_, DashboardStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::internal(anyhow::anyhow!("dashboard store lock poisoned")))
    }
}

/// JSON response wrapper
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> JsonResponse<()> {
        JsonResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Custom error type for HTTP handlers
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    pub fn internal(error: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow::anyhow!(msg.into()),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: anyhow::anyhow!(msg.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("request failed: {:#}", self.error);
        }
        (
            self.status,
            Json(JsonResponse::<()>::err(self.error.to_string())),
        )
            .into_response()
    }
}

/// Core errors all come from rejected input.
impl From<BriefMeError> for AppError {
    fn from(err: BriefMeError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::bad_request(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
