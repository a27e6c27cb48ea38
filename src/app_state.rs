//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::auth::CredentialValidator;
use crate::store::BookStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Built once in `main` and cloned per request; cloning only bumps the
/// reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Record store for all book operations.
    pub store: Arc<dyn BookStore>,
    /// Credential check applied to protected routes.
    pub validator: Arc<dyn CredentialValidator>,
}

impl AppState {
    /// Bundles the store and the credential validator.
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>, validator: Arc<dyn CredentialValidator>) -> Self {
        Self { store, validator }
    }
}
