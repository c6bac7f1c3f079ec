use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::market::{MarketSearchQuery, MarketSearchResponse};
use crate::error::{ApiError, ApiResult};

/// Find buyer markets for a crop near a location
///
/// GET /market/search?crop=&location=&sort=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketSearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let crop = query.crop.as_deref().map(str::trim).unwrap_or_default();
    let location = query.location.as_deref().map(str::trim).unwrap_or_default();

    if crop.is_empty() || location.is_empty() {
        return Err(ApiError::BadRequest(
            "Please select crop type and location".to_string(),
        ));
    }

    let sort = query.sort.unwrap_or_default();
    let markets = sort.apply(state.markets.find(crop, location));

    Ok(DataResponse::new(MarketSearchResponse {
        crop: crop.to_string(),
        location: location.to_string(),
        sort,
        markets,
    }))
}
