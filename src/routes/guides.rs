use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::guides::{DownloadedGuidesResponse, GuideCatalogResponse};
use crate::error::ApiResult;

/// GET /guides
pub async fn catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(GuideCatalogResponse {
        guides: state.guides.guides(),
        crops: state.guides.crop_sheets(),
    })
}

/// POST /guides/:guide_id/download
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(guide_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.guides.download(&guide_id)?;
    tracing::info!(guide_id = %guide_id, "Guide marked for offline use");

    Ok(DataResponse::new(DownloadedGuidesResponse {
        downloaded: state.guides.downloaded(),
    }))
}

/// GET /guides/downloaded
pub async fn downloaded(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(DownloadedGuidesResponse {
        downloaded: state.guides.downloaded(),
    })
}
