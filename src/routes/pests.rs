use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::pests::{OutbreakFilter, OutbreakQuery, OutbreakResponse};

/// Pest outbreaks for the map, with filter facets
///
/// GET /pests/outbreaks?crop=&pest=&max_days=
pub async fn list_outbreaks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OutbreakQuery>,
) -> impl IntoResponse {
    let filter = OutbreakFilter::from(query);
    let outbreaks = state.pests.search(&filter);
    let (crops, pests) = state.pests.facets();

    DataResponse::new(OutbreakResponse {
        outbreaks,
        crops,
        pests,
    })
}
