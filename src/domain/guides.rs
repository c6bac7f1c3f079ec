use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A downloadable farming guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub description: String,
    pub size: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropGroup {
    Cereal,
    Vegetable,
}

/// Crop quick-reference sheet from the crop library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropSheet {
    pub id: String,
    pub name: String,
    pub group: CropGroup,
    pub sowing_season: String,
    pub harvest: String,
    pub water: String,
    pub sunlight: String,
    pub soil: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuideError {
    #[error("Guide '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideCatalogResponse {
    pub guides: Vec<Guide>,
    pub crops: Vec<CropSheet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadedGuidesResponse {
    pub downloaded: Vec<String>,
}
