//! Water requirement domain types and reference tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Square meters in one acre.
pub const SQUARE_METERS_PER_ACRE: f64 = 4047.0;

/// Crops with a known base water requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Crop {
    Rice,
    Wheat,
    Sugarcane,
    Cotton,
    Tomato,
    Potato,
    Onion,
    Maize,
    Unknown,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::Wheat => "wheat",
            Self::Sugarcane => "sugarcane",
            Self::Cotton => "cotton",
            Self::Tomato => "tomato",
            Self::Potato => "potato",
            Self::Onion => "onion",
            Self::Maize => "maize",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Crop {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "rice" => Self::Rice,
            "wheat" => Self::Wheat,
            "sugarcane" => Self::Sugarcane,
            "cotton" => Self::Cotton,
            "tomato" => Self::Tomato,
            "potato" => Self::Potato,
            "onion" => Self::Onion,
            "maize" => Self::Maize,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Crop {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SoilType {
    Sandy,
    Loam,
    Clay,
    Silt,
    Unknown,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandy => "sandy",
            Self::Loam => "loam",
            Self::Clay => "clay",
            Self::Silt => "silt",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for SoilType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sandy" => Self::Sandy,
            "loam" => Self::Loam,
            "clay" => Self::Clay,
            "silt" => Self::Silt,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for SoilType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    Spring,
    Unknown,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Monsoon => "monsoon",
            Self::Spring => "spring",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Season {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "summer" => Self::Summer,
            "winter" => Self::Winter,
            "monsoon" => Self::Monsoon,
            "spring" => Self::Spring,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Season {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Reference tables used by the estimator.
///
/// Base rates are liters per square meter per day. Keys missing from a
/// table fall back to the matching default rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct WaterRates {
    pub crop_base_rates: BTreeMap<Crop, f64>,
    pub soil_multipliers: BTreeMap<SoilType, f64>,
    pub season_multipliers: BTreeMap<Season, f64>,
    pub default_base_rate: f64,
    pub default_multiplier: f64,
    pub drip_saving_ratio: f64,
    pub mulching_saving_ratio: f64,
}

impl WaterRates {
    pub fn base_rate(&self, crop: Crop) -> f64 {
        self.crop_base_rates
            .get(&crop)
            .copied()
            .unwrap_or(self.default_base_rate)
    }

    pub fn soil_multiplier(&self, soil: SoilType) -> f64 {
        self.soil_multipliers
            .get(&soil)
            .copied()
            .unwrap_or(self.default_multiplier)
    }

    pub fn season_multiplier(&self, season: Season) -> f64 {
        self.season_multipliers
            .get(&season)
            .copied()
            .unwrap_or(self.default_multiplier)
    }
}

impl Default for WaterRates {
    fn default() -> Self {
        let crop_base_rates = BTreeMap::from([
            (Crop::Rice, 8.5),
            (Crop::Wheat, 4.2),
            (Crop::Sugarcane, 6.5),
            (Crop::Cotton, 5.0),
            (Crop::Tomato, 5.5),
            (Crop::Potato, 4.8),
            (Crop::Onion, 3.5),
            (Crop::Maize, 5.2),
        ]);

        // Sandy soil drains fastest, clay retains the most
        let soil_multipliers = BTreeMap::from([
            (SoilType::Sandy, 1.2),
            (SoilType::Loam, 1.0),
            (SoilType::Clay, 0.8),
            (SoilType::Silt, 0.9),
        ]);

        let season_multipliers = BTreeMap::from([
            (Season::Summer, 1.3),
            (Season::Winter, 0.7),
            (Season::Monsoon, 0.5),
            (Season::Spring, 1.0),
        ]);

        Self {
            crop_base_rates,
            soil_multipliers,
            season_multipliers,
            default_base_rate: 5.0,
            default_multiplier: 1.0,
            drip_saving_ratio: 0.40,
            mulching_saving_ratio: 0.25,
        }
    }
}

/// Validated input for a single water estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterCalculationRequest {
    pub crop: Crop,
    pub farm_size_acres: f64,
    pub soil_type: SoilType,
    pub season: Season,
}

/// Estimated water volumes in cubic meters, rounded to two decimals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WaterCalculationResult {
    pub daily_water: f64,
    pub weekly_water: f64,
    pub monthly_water: f64,
    /// Cubic meters per day saved by switching to drip irrigation
    pub drip_savings: f64,
    /// Cubic meters per day saved by mulching
    pub mulching_savings: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum WaterEstimateError {
    #[error("{0}")]
    InvalidInput(String),
}

/// Farm size as submitted by a client: forms send strings, API callers numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FarmSizeInput {
    Number(f64),
    Text(String),
}

impl FarmSizeInput {
    pub fn to_acres(&self) -> Result<f64, WaterEstimateError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                WaterEstimateError::InvalidInput(format!(
                    "farm size '{}' is not a number",
                    s.trim()
                ))
            }),
        }
    }
}

/// Request DTO for `POST /water/estimate`.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateWaterRequest {
    pub crop: Crop,
    pub farm_size: FarmSizeInput,
    pub soil_type: SoilType,
    pub season: Season,
}

impl EstimateWaterRequest {
    pub fn into_calculation(self) -> Result<WaterCalculationRequest, WaterEstimateError> {
        Ok(WaterCalculationRequest {
            crop: self.crop,
            farm_size_acres: self.farm_size.to_acres()?,
            soil_type: self.soil_type,
            season: self.season,
        })
    }
}

/// Response DTO for `POST /water/estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateWaterResponse {
    pub crop: Crop,
    pub farm_size_acres: f64,
    pub soil_type: SoilType,
    pub season: Season,
    pub result: WaterCalculationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!(Crop::from(" Wheat "), Crop::Wheat);
        assert_eq!(SoilType::from("CLAY"), SoilType::Clay);
        assert_eq!(Season::from("Monsoon"), Season::Monsoon);
    }

    #[test]
    fn unrecognized_keys_become_unknown() {
        assert_eq!(Crop::from("quinoa"), Crop::Unknown);
        assert_eq!(SoilType::from("peat"), SoilType::Unknown);
        assert_eq!(Season::from("autumn"), Season::Unknown);
    }

    #[test]
    fn request_accepts_numeric_string_farm_size() {
        let req: EstimateWaterRequest = serde_json::from_value(serde_json::json!({
            "crop": "rice",
            "farm_size": " 2.5 ",
            "soil_type": "loam",
            "season": "summer"
        }))
        .unwrap();

        let calc = req.into_calculation().unwrap();
        assert_eq!(calc.crop, Crop::Rice);
        assert_eq!(calc.farm_size_acres, 2.5);
    }

    #[test]
    fn request_rejects_non_numeric_farm_size() {
        let req: EstimateWaterRequest = serde_json::from_value(serde_json::json!({
            "crop": "rice",
            "farm_size": "two acres",
            "soil_type": "loam",
            "season": "summer"
        }))
        .unwrap();

        assert!(matches!(
            req.into_calculation(),
            Err(WaterEstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_crop_deserializes_without_error() {
        let req: EstimateWaterRequest = serde_json::from_value(serde_json::json!({
            "crop": "dragonfruit",
            "farm_size": 1,
            "soil_type": "volcanic",
            "season": "autumn"
        }))
        .unwrap();

        assert_eq!(req.crop, Crop::Unknown);
        assert_eq!(req.soil_type, SoilType::Unknown);
        assert_eq!(req.season, Season::Unknown);
    }

    #[test]
    fn default_rates_fall_back_for_unknown_keys() {
        let rates = WaterRates::default();
        assert_eq!(rates.base_rate(Crop::Unknown), 5.0);
        assert_eq!(rates.soil_multiplier(SoilType::Unknown), 1.0);
        assert_eq!(rates.season_multiplier(Season::Unknown), 1.0);
        assert_eq!(rates.base_rate(Crop::Onion), 3.5);
    }
}
