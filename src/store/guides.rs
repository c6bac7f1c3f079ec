//! Offline guide library and the record of downloaded guides.

use parking_lot::RwLock;

use crate::domain::guides::{CropGroup, CropSheet, Guide, GuideError};

pub trait GuideRepository: Send + Sync {
    fn guides(&self) -> Vec<Guide>;

    fn crop_sheets(&self) -> Vec<CropSheet>;

    /// Mark a guide or crop sheet as downloaded. Repeated downloads are
    /// recorded once.
    fn download(&self, id: &str) -> Result<(), GuideError>;

    /// Downloaded ids in download order.
    fn downloaded(&self) -> Vec<String>;
}

pub struct InMemoryGuides {
    guides: Vec<Guide>,
    crops: Vec<CropSheet>,
    downloaded: RwLock<Vec<String>>,
}

impl InMemoryGuides {
    pub fn new(guides: Vec<Guide>, crops: Vec<CropSheet>) -> Self {
        Self {
            guides,
            crops,
            downloaded: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        let guide = |id: &str, title: &str, description: &str, size: &str| Guide {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            size: size.to_string(),
        };

        let guides = vec![
            guide(
                "pest-management",
                "Pest Management",
                "Learn how to identify and manage common crop pests without chemicals",
                "2.4 MB",
            ),
            guide(
                "water-conservation",
                "Water Conservation",
                "Techniques to reduce water usage while maintaining crop health",
                "1.8 MB",
            ),
            guide(
                "organic-farming",
                "Organic Farming",
                "Complete guide to transitioning to organic farming methods",
                "3.5 MB",
            ),
            guide(
                "soil-health",
                "Soil Health",
                "How to test, maintain and improve your soil quality naturally",
                "2.1 MB",
            ),
            guide(
                "seed-saving",
                "Seed Saving",
                "Techniques for harvesting and storing seeds for next season",
                "1.5 MB",
            ),
            guide(
                "crop-rotation",
                "Crop Rotation",
                "Maximize soil health and yields with proper crop rotation",
                "1.9 MB",
            ),
        ];

        let sheet = |id: &str,
                     name: &str,
                     group: CropGroup,
                     sowing_season: &str,
                     harvest: &str,
                     water: &str,
                     soil: &str| CropSheet {
            id: id.to_string(),
            name: name.to_string(),
            group,
            sowing_season: sowing_season.to_string(),
            harvest: harvest.to_string(),
            water: water.to_string(),
            sunlight: "Full sun".to_string(),
            soil: soil.to_string(),
        };

        let crops = vec![
            sheet(
                "wheat",
                "Wheat",
                CropGroup::Cereal,
                "October-November",
                "March-April",
                "Medium (450-650mm)",
                "Well-drained loamy",
            ),
            sheet(
                "rice",
                "Rice",
                CropGroup::Cereal,
                "June-July",
                "November-December",
                "High (1000-1500mm)",
                "Clay or clay loam",
            ),
            sheet(
                "maize",
                "Maize",
                CropGroup::Cereal,
                "June-July",
                "September-October",
                "Medium (500-800mm)",
                "Well-drained loamy",
            ),
            sheet(
                "tomato",
                "Tomato",
                CropGroup::Vegetable,
                "Year-round",
                "60-80 days after planting",
                "Medium (regular)",
                "Well-drained, rich",
            ),
        ];

        Self::new(guides, crops)
    }

    fn exists(&self, id: &str) -> bool {
        self.guides.iter().any(|g| g.id == id) || self.crops.iter().any(|c| c.id == id)
    }
}

impl GuideRepository for InMemoryGuides {
    fn guides(&self) -> Vec<Guide> {
        self.guides.clone()
    }

    fn crop_sheets(&self) -> Vec<CropSheet> {
        self.crops.clone()
    }

    fn download(&self, id: &str) -> Result<(), GuideError> {
        if !self.exists(id) {
            return Err(GuideError::NotFound(id.to_string()));
        }

        let mut downloaded = self.downloaded.write();
        if !downloaded.iter().any(|d| d == id) {
            downloaded.push(id.to_string());
        }
        Ok(())
    }

    fn downloaded(&self) -> Vec<String> {
        self.downloaded.read().clone()
    }
}
