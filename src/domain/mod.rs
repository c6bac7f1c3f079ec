//! Domain types and DTOs
//!
//! Each module is accessed by path (`crate::domain::water::...`) to keep
//! request/response names from colliding.

pub mod assistant;
pub mod community;
pub mod guides;
pub mod market;
pub mod pests;
pub mod water;
