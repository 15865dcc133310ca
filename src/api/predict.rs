//! Image identification endpoint

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ImageUpload, PredictResponse};

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    upload: ImageUpload,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(
        file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = upload.bytes.len(),
        "Identifying uploaded image"
    );

    let identification = state
        .identification_service
        .identify(upload.into_bytes().to_vec())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PredictResponse::from_domain(&identification)))
}
