//! Request extractors whose rejections are API-shaped.
//!
//! axum's stock `Path` and `Query` reject with plain-text bodies. Everything
//! here either rejects with an [`ApiError`] or cannot fail at all.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::api::dto::ListParams;
use crate::domain::BookId;
use crate::error::ApiError;

/// JSON body extractor that rejects with an [`ApiError`].
///
/// The body is buffered first, so the size ceiling installed by
/// `DefaultBodyLimit` trips before any decoding. No `Content-Type` header is
/// required.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                tracing::debug!(%rejection, "failed to buffer request body");
                ApiError::InvalidRequest("invalid request payload".to_string())
            }
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "rejected request payload");
            ApiError::InvalidRequest("invalid request payload".to_string())
        })
    }
}

/// The `{id}` segment of `/books/{id}`, parsed into a [`BookId`].
///
/// A segment that does not percent-decode to UTF-8 is reported the same way
/// as one that is not a UUID: [`ApiError::InvalidId`] with the raw segment.
#[derive(Debug, Clone, Copy)]
pub struct BookPath(pub BookId);

impl<S> FromRequestParts<S> for BookPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => Ok(Self(segment.parse()?)),
            Err(rejection) => {
                tracing::debug!(%rejection, "undecodable book id segment");
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(ApiError::InvalidId(raw.to_string()))
            }
        }
    }
}

/// Pagination is read leniently: an undecodable query string is treated as
/// empty, and repeated keys keep their first value.
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(%rejection, "ignoring undecodable query string");
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}
