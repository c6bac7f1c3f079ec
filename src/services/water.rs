//! Crop water requirement estimator.
//!
//! Pure arithmetic over the configured [`WaterRates`]. Rates are liters per
//! square meter per day; every output volume is in cubic meters.

use crate::domain::water::{
    WaterCalculationRequest, WaterCalculationResult, WaterEstimateError, WaterRates,
    SQUARE_METERS_PER_ACRE,
};

#[derive(Debug, Clone, Default)]
pub struct WaterNeedEstimator {
    rates: WaterRates,
}

impl WaterNeedEstimator {
    pub fn new(rates: WaterRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &WaterRates {
        &self.rates
    }

    /// Estimate daily, weekly and monthly irrigation volume for a farm.
    ///
    /// Unknown crop, soil or season keys use the table defaults. Only a
    /// farm size that is not a positive finite number is rejected.
    pub fn estimate(
        &self,
        request: &WaterCalculationRequest,
    ) -> Result<WaterCalculationResult, WaterEstimateError> {
        let acres = request.farm_size_acres;
        if !acres.is_finite() || acres <= 0.0 {
            return Err(WaterEstimateError::InvalidInput(
                "farm size must be a positive number of acres".to_string(),
            ));
        }

        let area_sq_m = acres * SQUARE_METERS_PER_ACRE;
        let liters_per_sq_m = self.rates.base_rate(request.crop)
            * self.rates.soil_multiplier(request.soil_type)
            * self.rates.season_multiplier(request.season);

        let daily_cubic_m = liters_per_sq_m * area_sq_m / 1000.0;

        let result = WaterCalculationResult {
            daily_water: round2(daily_cubic_m),
            weekly_water: round2(daily_cubic_m * 7.0),
            monthly_water: round2(daily_cubic_m * 30.0),
            drip_savings: round2(daily_cubic_m * self.rates.drip_saving_ratio),
            mulching_savings: round2(daily_cubic_m * self.rates.mulching_saving_ratio),
        };

        // Huge but finite sizes overflow somewhere along the way
        let volumes = [
            result.daily_water,
            result.weekly_water,
            result.monthly_water,
            result.drip_savings,
            result.mulching_savings,
        ];
        if volumes.iter().any(|v| !v.is_finite()) {
            return Err(WaterEstimateError::InvalidInput(
                "farm size is too large to estimate".to_string(),
            ));
        }

        Ok(result)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
