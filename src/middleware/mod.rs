//! HTTP middleware shared by all routes

pub mod request_id;

use tower_http::limit::RequestBodyLimitLayer;

pub use request_id::{request_id_layer, RequestIdExt};

/// Largest accepted request body. Chat questions and forum posts are short.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}
