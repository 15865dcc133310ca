//! Species catalog and report download endpoints

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, SpeciesListResponse, SpeciesSummary, SpeciesView};

/// GET /species
pub async fn list_species(State(state): State<AppState>) -> Json<SpeciesListResponse> {
    let species = state
        .species_service
        .list()
        .into_iter()
        .map(SpeciesSummary::from_domain)
        .collect();

    Json(SpeciesListResponse { species })
}

/// GET /species/{fish}
pub async fn get_species(
    State(state): State<AppState>,
    Path(fish): Path<String>,
) -> Result<Json<SpeciesView>, ApiError> {
    debug!(fish = %fish, "Getting species");

    let record = state.species_service.get(&fish).map_err(ApiError::from)?;

    Ok(Json(SpeciesView::from_domain(record)))
}

/// GET /download/{fish}
pub async fn download_report(
    State(state): State<AppState>,
    Path(fish): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(fish = %fish, "Exporting species report");

    let report = state.species_service.export(&fish).map_err(ApiError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.file_name),
            ),
        ],
        report.bytes,
    ))
}
