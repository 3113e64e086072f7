//! Transcript analysis endpoint.

use crate::ApiError;
use axum::extract::{Multipart, State};
use axum::Json;
use moodline_analysis::AnalysisContext;
use moodline_core::types::ChatReport;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, instrument};

/// Multipart field carrying the transcript upload.
const FILE_FIELD: &str = "file";

/// Service banner for the root route.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Moodline chat sentiment analysis API is running" }))
}

/// `POST /analyze` — run the whole pipeline over an uploaded transcript.
///
/// Expects a multipart upload with the transcript in the `file` field.
/// `EmptyInput` from the pipeline becomes a structured 400 payload, never a
/// stack trace.
#[instrument(skip_all)]
pub async fn analyze(
    State(context): State<Arc<AnalysisContext>>,
    mut multipart: Multipart,
) -> Result<Json<ChatReport>, ApiError> {
    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Upload(e.to_string()))?;
            upload = Some(bytes.to_vec());
            break;
        }
    }

    let bytes = upload.ok_or_else(|| {
        ApiError::InvalidRequest(format!("missing multipart field {FILE_FIELD:?}"))
    })?;
    info!(size = bytes.len(), "received transcript upload");

    // Encoding detection belongs to the transport caller; uploads without a
    // declared encoding go through the permissive UTF-8 path.
    let report = context.analyze_bytes(&bytes, None)?;
    Ok(Json(report))
}
