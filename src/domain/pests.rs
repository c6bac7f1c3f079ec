use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A reported pest outbreak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PestOutbreak {
    pub id: u32,
    pub location: String,
    pub crop: String,
    pub pest: String,
    pub severity: Severity,
    pub reported_days_ago: u32,
    pub lat: f64,
    pub lng: f64,
}

/// Outbreak filter. `None` (or "all" from the API) matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutbreakFilter {
    pub crop: Option<String>,
    pub pest: Option<String>,
    pub max_days: u32,
}

impl Default for OutbreakFilter {
    fn default() -> Self {
        Self {
            crop: None,
            pest: None,
            max_days: 30,
        }
    }
}

impl OutbreakFilter {
    pub fn matches(&self, outbreak: &PestOutbreak) -> bool {
        let crop_ok = self
            .crop
            .as_deref()
            .map_or(true, |c| outbreak.crop.eq_ignore_ascii_case(c));
        let pest_ok = self
            .pest
            .as_deref()
            .map_or(true, |p| outbreak.pest.eq_ignore_ascii_case(p));

        crop_ok && pest_ok && outbreak.reported_days_ago <= self.max_days
    }
}

/// Query parameters for `GET /pests/outbreaks`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutbreakQuery {
    pub crop: Option<String>,
    pub pest: Option<String>,
    pub max_days: Option<u32>,
}

impl From<OutbreakQuery> for OutbreakFilter {
    fn from(q: OutbreakQuery) -> Self {
        fn selector(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
        }

        Self {
            crop: selector(q.crop),
            pest: selector(q.pest),
            max_days: q.max_days.unwrap_or(Self::default().max_days),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutbreakResponse {
    pub outbreaks: Vec<PestOutbreak>,
    /// Distinct crops across all reports, for filter menus
    pub crops: Vec<String>,
    pub pests: Vec<String>,
}
