use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    Up,
    Down,
}

/// A buyer market and its current offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketListing {
    pub id: u32,
    pub market_name: String,
    pub distance_km: u32,
    /// Rupees per quintal
    pub price: u32,
    pub price_change: u32,
    pub price_direction: PriceDirection,
    pub contact_name: String,
    pub contact_phone: String,
    pub transport_available: bool,
    pub transport_cost: u32,
}

/// Result ordering for a market search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarketSort {
    /// Highest price first
    #[default]
    Price,
    /// Nearest first
    Distance,
    /// Only markets offering transport, nearest first
    Transport,
}

impl MarketSort {
    pub fn apply(self, mut listings: Vec<MarketListing>) -> Vec<MarketListing> {
        match self {
            Self::Price => listings.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Distance => listings.sort_by_key(|m| m.distance_km),
            Self::Transport => {
                listings.retain(|m| m.transport_available);
                listings.sort_by_key(|m| m.distance_km);
            }
        }
        listings
    }
}

/// Query parameters for `GET /market/search`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MarketSearchQuery {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sort: Option<MarketSort>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSearchResponse {
    pub crop: String,
    pub location: String,
    pub sort: MarketSort,
    pub markets: Vec<MarketListing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, distance_km: u32, price: u32, transport: bool) -> MarketListing {
        MarketListing {
            id,
            market_name: format!("Market {id}"),
            distance_km,
            price,
            price_change: 0,
            price_direction: PriceDirection::Up,
            contact_name: String::new(),
            contact_phone: String::new(),
            transport_available: transport,
            transport_cost: 0,
        }
    }

    fn ids(listings: &[MarketListing]) -> Vec<u32> {
        listings.iter().map(|m| m.id).collect()
    }

    #[test]
    fn sorts_by_price_distance_and_transport() {
        let listings = vec![
            listing(1, 30, 2400, true),
            listing(2, 10, 2300, false),
            listing(3, 20, 2500, true),
        ];

        assert_eq!(ids(&MarketSort::Price.apply(listings.clone())), vec![3, 1, 2]);
        assert_eq!(ids(&MarketSort::Distance.apply(listings.clone())), vec![2, 3, 1]);
        assert_eq!(ids(&MarketSort::Transport.apply(listings)), vec![3, 1]);
    }
}
