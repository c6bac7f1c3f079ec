use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::{body_limit_layer, request_id_layer};
use crate::routes;
use crate::services::{FarmingAssistant, WaterNeedEstimator};
use crate::store::{ForumRepository, GuideRepository, MarketRepository, PestReportRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub water: WaterNeedEstimator,
    pub assistant: FarmingAssistant,
    pub forum: Arc<dyn ForumRepository>,
    pub markets: Arc<dyn MarketRepository>,
    pub pests: Arc<dyn PestReportRepository>,
    pub guides: Arc<dyn GuideRepository>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        water: WaterNeedEstimator,
        assistant: FarmingAssistant,
        forum: Arc<dyn ForumRepository>,
        markets: Arc<dyn MarketRepository>,
        pests: Arc<dyn PestReportRepository>,
        guides: Arc<dyn GuideRepository>,
    ) -> Arc<Self> {
        Arc::new(Self {
            settings,
            water,
            assistant,
            forum,
            markets,
            pests,
            guides,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    // Spans at DEBUG keep INFO output to one line per event
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();

    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(body_limit_layer())
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static("x-request-id"),
        ]))
        .max_age(max_age)
}
