//! The record store handle.
//!
//! `RecordStore` wraps a [`TableBackend`]. All repo methods are implemented
//! as `impl RecordStore` blocks in [`crate::repos`].

use placement_config::BackendConfig;

use crate::backend::TableBackend;
use crate::error::StoreError;
use crate::rest::RestBackend;

/// Typed access to the `jobs`, `companies` and `testimonials` tables.
pub struct RecordStore<B: TableBackend = RestBackend> {
    backend: B,
}

impl RecordStore<RestBackend> {
    /// Create a store talking to the hosted table API.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if the backend section is incomplete.
    pub fn from_config(config: &BackendConfig) -> Result<Self, StoreError> {
        Ok(Self::new(RestBackend::from_config(config)?))
    }
}

impl<B: TableBackend> RecordStore<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Attach the signed-in user's access token to later requests.
    pub fn set_access_token(&self, token: Option<String>) {
        self.backend.set_access_token(token);
    }
}
