//! Water requirement endpoints.

use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::api::{ApiJson, DataResponse};
use crate::app::AppState;
use crate::domain::water::{EstimateWaterRequest, EstimateWaterResponse};
use crate::error::ApiResult;

/// Estimate irrigation volume for a farm.
///
/// POST /water/estimate
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<EstimateWaterRequest>,
) -> ApiResult<impl IntoResponse> {
    let calculation = req.into_calculation()?;
    let result = state.water.estimate(&calculation)?;

    tracing::info!(
        crop = %calculation.crop,
        farm_size_acres = calculation.farm_size_acres,
        soil_type = calculation.soil_type.as_str(),
        season = calculation.season.as_str(),
        daily_water = result.daily_water,
        "Water estimate computed"
    );

    Ok(DataResponse::new(EstimateWaterResponse {
        crop: calculation.crop,
        farm_size_acres: calculation.farm_size_acres,
        soil_type: calculation.soil_type,
        season: calculation.season,
        result,
    }))
}

/// Reference tables the estimator is using.
///
/// GET /water/rates
pub async fn rates(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(state.water.rates().clone())
}
