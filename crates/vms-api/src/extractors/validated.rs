//! JSON extractor that runs `validator` rules after deserializing.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// `Json<T>` plus a `validate()` pass.
///
/// Deserialization failures come back as 400 with the axum rejection text;
/// validation failures come back as 400 with per-field details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_query(rejection.body_text()))?;

        payload.validate()?;

        Ok(Self(payload))
    }
}
