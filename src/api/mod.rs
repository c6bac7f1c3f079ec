//! API response types and pagination utilities

pub mod json;
pub mod pagination;
pub mod response;

pub use json::ApiJson;
pub use pagination::{Paginated, PaginationParams};
pub use response::{Created, DataResponse};
