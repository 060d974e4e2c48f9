//! JSON body extractor with envelope-shaped rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor.
///
/// Deserialization failures become an `AppError` so malformed bodies get the
/// same envelope shape as every other rejection. Field-level validation is
/// not done here: the use cases own it.
pub struct BodyJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BodyJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(BodyJson(value))
    }
}
