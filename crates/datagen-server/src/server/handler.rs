//! Router and request handlers.
//!
//! The handlers are thin: each one calls a single `datagen` operation with
//! the shared [`FileConfig`] and shapes the result into a JSON body. Requests
//! are not serialized against each other, so concurrent generate/process
//! calls race on the same files.

use crate::server::error::ApiError;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use datagen::FileConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    files: Arc<FileConfig>,
}

impl AppState {
    pub fn new(files: FileConfig) -> Self {
        Self {
            files: Arc::new(files),
        }
    }

    pub fn files(&self) -> &FileConfig {
        &self.files
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub status_code: u16,
    pub message: String,
    pub file_path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub status_code: u16,
    pub message: String,
    pub output_path: PathBuf,
}

/// Builds the application router.
///
/// - `GET /file/generate` - write a fresh raw file.
/// - `GET /file/process` - classify the raw file into the JSON output.
/// - `GET /health` - liveness probe.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/file/generate", get(generate_file))
        .route("/file/process", get(process_file))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
async fn generate_file(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    #[cfg(feature = "tracing")]
    tracing::info!("Generating file...");

    let file_path = datagen::generate(state.files())
        .await
        .map_err(ApiError::Generate)?;

    #[cfg(feature = "tracing")]
    tracing::info!("File successfully generated at: {}", file_path.display());

    let status = StatusCode::CREATED;
    Ok((
        status,
        Json(GenerateResponse {
            status_code: status.as_u16(),
            message: "File generated successfully".to_string(),
            file_path,
        }),
    ))
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
async fn process_file(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    #[cfg(feature = "tracing")]
    tracing::info!("Processing file...");

    let outcome = datagen::process(state.files())
        .await
        .map_err(ApiError::Process)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Processing complete. {} values saved at: {}",
        outcome.items,
        outcome.output_path.display()
    );

    let status = StatusCode::OK;
    Ok((
        status,
        Json(ProcessResponse {
            status_code: status.as_u16(),
            message: "File processed successfully".to_string(),
            output_path: outcome.output_path,
        }),
    ))
}

async fn health() -> &'static str {
    "ok"
}
