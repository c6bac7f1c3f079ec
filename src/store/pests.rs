//! Pest outbreak reports for the pest map.

use crate::domain::pests::{OutbreakFilter, PestOutbreak, Severity};

pub trait PestReportRepository: Send + Sync {
    fn all(&self) -> Vec<PestOutbreak>;

    fn search(&self, filter: &OutbreakFilter) -> Vec<PestOutbreak> {
        self.all()
            .into_iter()
            .filter(|o| filter.matches(o))
            .collect()
    }

    /// Distinct crops and pests across every report, in first-seen order.
    fn facets(&self) -> (Vec<String>, Vec<String>) {
        let mut crops: Vec<String> = Vec::new();
        let mut pests: Vec<String> = Vec::new();
        for outbreak in self.all() {
            if !crops.contains(&outbreak.crop) {
                crops.push(outbreak.crop.clone());
            }
            if !pests.contains(&outbreak.pest) {
                pests.push(outbreak.pest);
            }
        }
        (crops, pests)
    }
}

pub struct StaticPestReports {
    reports: Vec<PestOutbreak>,
}

impl StaticPestReports {
    pub fn new(reports: Vec<PestOutbreak>) -> Self {
        Self { reports }
    }

    pub fn seeded() -> Self {
        let report = |id: u32,
                      location: &str,
                      crop: &str,
                      pest: &str,
                      severity: Severity,
                      reported_days_ago: u32,
                      lat: f64,
                      lng: f64| PestOutbreak {
            id,
            location: location.to_string(),
            crop: crop.to_string(),
            pest: pest.to_string(),
            severity,
            reported_days_ago,
            lat,
            lng,
        };

        Self::new(vec![
            report(
                1,
                "Nashik, Maharashtra",
                "tomato",
                "whitefly",
                Severity::High,
                5,
                19.9975,
                73.7898,
            ),
            report(
                2,
                "Pune, Maharashtra",
                "sugarcane",
                "aphid",
                Severity::Medium,
                12,
                18.5204,
                73.8567,
            ),
            report(
                3,
                "Nagpur, Maharashtra",
                "cotton",
                "bollworm",
                Severity::High,
                8,
                21.1458,
                79.0882,
            ),
            report(
                4,
                "Amravati, Maharashtra",
                "soybean",
                "caterpillar",
                Severity::Low,
                20,
                20.932,
                77.7523,
            ),
            report(
                5,
                "Kolhapur, Maharashtra",
                "rice",
                "stem borer",
                Severity::Medium,
                15,
                16.705,
                74.2433,
            ),
            report(
                6,
                "Aurangabad, Maharashtra",
                "cotton",
                "aphid",
                Severity::Low,
                25,
                19.8762,
                75.3433,
            ),
            report(
                7,
                "Solapur, Maharashtra",
                "sugarcane",
                "mealybug",
                Severity::High,
                3,
                17.6599,
                75.9064,
            ),
        ])
    }
}

impl PestReportRepository for StaticPestReports {
    fn all(&self) -> Vec<PestOutbreak> {
        self.reports.clone()
    }
}
