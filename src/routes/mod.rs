pub mod assistant;
pub mod community;
pub mod guides;
pub mod health;
pub mod market;
pub mod pests;
pub mod water;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Water calculator
        .route("/water/estimate", post(water::estimate))
        .route("/water/rates", get(water::rates))
        // Farming assistant
        .route("/assistant/chat", post(assistant::chat))
        .route("/assistant/suggestions", get(assistant::suggestions))
        // Community forum
        .route(
            "/community/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route(
            "/community/posts/:post_id/like",
            post(community::like_post),
        )
        // Market finder
        .route("/market/search", get(market::search))
        // Pest map
        .route("/pests/outbreaks", get(pests::list_outbreaks))
        // Offline guides
        .route("/guides", get(guides::catalog))
        .route("/guides/downloaded", get(guides::downloaded))
        .route("/guides/:guide_id/download", post(guides::download))
}
