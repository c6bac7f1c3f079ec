//! Buyer markets for the market finder.

use crate::domain::market::{MarketListing, PriceDirection};

pub trait MarketRepository: Send + Sync {
    /// Markets buying `crop` near `location`.
    fn find(&self, crop: &str, location: &str) -> Vec<MarketListing>;
}

/// Fixed listing table. There is no live price feed, so every crop and
/// location sees the same markets.
pub struct StaticMarkets {
    listings: Vec<MarketListing>,
}

impl StaticMarkets {
    pub fn new(listings: Vec<MarketListing>) -> Self {
        Self { listings }
    }

    pub fn seeded() -> Self {
        let listing = |id: u32,
                       market_name: &str,
                       distance_km: u32,
                       price: u32,
                       price_change: u32,
                       price_direction: PriceDirection,
                       contact_name: &str,
                       contact_phone: &str,
                       transport_cost: Option<u32>| MarketListing {
            id,
            market_name: market_name.to_string(),
            distance_km,
            price,
            price_change,
            price_direction,
            contact_name: contact_name.to_string(),
            contact_phone: contact_phone.to_string(),
            transport_available: transport_cost.is_some(),
            transport_cost: transport_cost.unwrap_or(0),
        };

        Self::new(vec![
            listing(
                1,
                "Pune APMC Market",
                12,
                2450,
                150,
                PriceDirection::Up,
                "Rajesh Sharma",
                "9876543210",
                Some(800),
            ),
            listing(
                2,
                "Nashik Wholesale Market",
                28,
                2380,
                80,
                PriceDirection::Up,
                "Sunil Patil",
                "9876543211",
                Some(1200),
            ),
            listing(
                3,
                "Solapur Farmers Market",
                35,
                2500,
                50,
                PriceDirection::Down,
                "Anand Jadhav",
                "9876543212",
                None,
            ),
            listing(
                4,
                "Kolhapur Agricultural Market",
                42,
                2420,
                100,
                PriceDirection::Up,
                "Vijay Mane",
                "9876543213",
                Some(1500),
            ),
        ])
    }
}

impl MarketRepository for StaticMarkets {
    fn find(&self, crop: &str, location: &str) -> Vec<MarketListing> {
        tracing::debug!(crop = crop, location = location, "Market lookup");
        self.listings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_markets_flag_transport_from_cost() {
        let markets = StaticMarkets::seeded().find("wheat", "pune");
        assert_eq!(markets.len(), 4);

        let solapur = markets.iter().find(|m| m.id == 3).unwrap();
        assert!(!solapur.transport_available);
        assert_eq!(solapur.transport_cost, 0);
        assert_eq!(solapur.price_direction, PriceDirection::Down);

        let pune = markets.iter().find(|m| m.id == 1).unwrap();
        assert!(pune.transport_available);
        assert_eq!(pune.transport_cost, 800);
    }
}
