//! JSON body extractor that reports malformed bodies in the API error format.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Drop-in replacement for [`Json`] whose rejection is an [`ApiError`].
///
/// Example:
/// ```ignore
/// async fn create(ApiJson(req): ApiJson<CreatePostRequest>) -> ApiResult<impl IntoResponse> {
///     ...
/// }
/// ```
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
