//! Helpers shared by the router-level tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use tower::ServiceExt;

use super::{DEFAULT_BODY_LIMIT, build_router};
use crate::app_state::AppState;
use crate::auth::StaticBearerToken;
use crate::domain::{Book, BookDraft, BookId};
use crate::store::{BookStore, MemoryBookStore, StoreError};

pub(crate) const TOKEN: &str = "test-token";
pub(crate) const AUTH: &str = "Bearer test-token";

pub(crate) fn app_with(store: Arc<dyn BookStore>) -> Router {
    let state = AppState::new(store, Arc::new(StaticBearerToken::new(TOKEN)));
    build_router(state, DEFAULT_BODY_LIMIT)
}

pub(crate) fn app() -> Router {
    app_with(Arc::new(MemoryBookStore::new()))
}

pub(crate) struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    #[allow(clippy::panic)]
    pub(crate) fn json(&self) -> serde_json::Value {
        let Ok(value) = serde_json::from_slice(&self.body) else {
            panic!("response body is not JSON: {:?}", self.body);
        };
        value
    }
}

/// Sends one request through a clone of the router.
#[allow(clippy::panic)]
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
    auth: Option<&str>,
) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
    let Ok(request) = builder.body(body) else {
        panic!("request build failed");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed");
    };
    let status = response.status();
    let headers = response.headers().clone();
    let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body read failed");
    };
    Reply {
        status,
        headers,
        body,
    }
}

/// Store whose every call fails with a backend error.
#[derive(Debug)]
pub(crate) struct FailingStore;

#[async_trait]
impl BookStore for FailingStore {
    async fn list(&self, _limit: u32, _offset: u64) -> Result<Vec<Book>, StoreError> {
        Err(StoreError::Backend("connection reset".into()))
    }
    async fn get(&self, _id: BookId) -> Result<Book, StoreError> {
        Err(StoreError::Backend("connection reset".into()))
    }
    async fn create(&self, _draft: BookDraft) -> Result<BookId, StoreError> {
        Err(StoreError::Backend("connection reset".into()))
    }
    async fn update(&self, _id: BookId, _draft: BookDraft) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection reset".into()))
    }
    async fn delete(&self, _id: BookId) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection reset".into()))
    }
}

/// Store that always reports a uniqueness violation on insert.
#[derive(Debug, Default)]
pub(crate) struct CollidingStore(pub MemoryBookStore);

#[async_trait]
impl BookStore for CollidingStore {
    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<Book>, StoreError> {
        self.0.list(limit, offset).await
    }
    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        self.0.get(id).await
    }
    async fn create(&self, _draft: BookDraft) -> Result<BookId, StoreError> {
        Err(StoreError::Duplicate)
    }
    async fn update(&self, id: BookId, draft: BookDraft) -> Result<(), StoreError> {
        self.0.update(id, draft).await
    }
    async fn delete(&self, id: BookId) -> Result<(), StoreError> {
        self.0.delete(id).await
    }
}

/// Wraps a store and counts how often it was touched.
#[derive(Debug, Default)]
pub(crate) struct CountingStore {
    inner: MemoryBookStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookStore for CountingStore {
    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<Book>, StoreError> {
        self.touch();
        self.inner.list(limit, offset).await
    }
    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        self.touch();
        self.inner.get(id).await
    }
    async fn create(&self, draft: BookDraft) -> Result<BookId, StoreError> {
        self.touch();
        self.inner.create(draft).await
    }
    async fn update(&self, id: BookId, draft: BookDraft) -> Result<(), StoreError> {
        self.touch();
        self.inner.update(id, draft).await
    }
    async fn delete(&self, id: BookId) -> Result<(), StoreError> {
        self.touch();
        self.inner.delete(id).await
    }
}
