use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{ApiJson, Created, DataResponse, Paginated, PaginationParams};
use crate::app::AppState;
use crate::domain::community::{CreatePostRequest, ListPostsQuery};
use crate::error::ApiResult;

/// List forum posts, newest first
///
/// GET /community/posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ListPostsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> impl IntoResponse {
    let posts = state.forum.list(filter.category);

    tracing::debug!(
        category = ?filter.category,
        total = posts.len(),
        page = pagination.page(),
        "Listing forum posts"
    );

    Paginated::from_items(posts, &pagination)
}

/// Create a forum post
///
/// POST /community/posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    let post = state.forum.create(req.into_new_post()?);

    tracing::info!(
        post_id = %post.id,
        category = ?post.category,
        "Forum post created"
    );

    Ok(Created(post))
}

/// Like a forum post
///
/// POST /community/posts/:post_id/like
pub async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let post = state.forum.like(post_id)?;
    Ok(DataResponse::new(post))
}
