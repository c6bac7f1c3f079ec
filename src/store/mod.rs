//! Repositories for the farmer-facing resources.
//!
//! Each resource sits behind a trait so handlers never touch shared state
//! directly. The bundled implementations are in-memory and seeded with the
//! demo data; nothing is persisted across restarts.

pub mod forum;
pub mod guides;
pub mod market;
pub mod pests;

pub use forum::{ForumRepository, InMemoryForum};
pub use guides::{GuideRepository, InMemoryGuides};
pub use market::{MarketRepository, StaticMarkets};
pub use pests::{PestReportRepository, StaticPestReports};
