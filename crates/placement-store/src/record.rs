//! Generic typed CRUD over a [`TableBackend`].
//!
//! Two flavours per read/delete path: `try_*` returns the error, the plain
//! method logs it and falls back (empty list, `None`, `false`). Inserts and
//! patches always return the error.

use placement_core::entities::{Company, Job, Testimonial};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;
use crate::rows::{CompanyRow, JobRow, TestimonialRow};
use crate::service::RecordStore;

/// A domain record stored in one table.
pub trait Record: Sized {
    const TABLE: &'static str;
    type Row: DeserializeOwned;

    /// Translate a storage row into the domain record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` when a column cannot be interpreted.
    fn from_row(row: Self::Row) -> Result<Self, StoreError>;

    /// Decode a raw JSON row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` if the row does not match the table shape.
    fn decode(value: Value) -> Result<Self, StoreError> {
        Self::from_row(serde_json::from_value(value)?)
    }
}

impl Record for Job {
    const TABLE: &'static str = "jobs";
    type Row = JobRow;

    fn from_row(row: JobRow) -> Result<Self, StoreError> {
        Self::try_from(row)
    }
}

impl Record for Company {
    const TABLE: &'static str = "companies";
    type Row = CompanyRow;

    fn from_row(row: CompanyRow) -> Result<Self, StoreError> {
        Ok(row.into())
    }
}

impl Record for Testimonial {
    const TABLE: &'static str = "testimonials";
    type Row = TestimonialRow;

    fn from_row(row: TestimonialRow) -> Result<Self, StoreError> {
        Ok(row.into())
    }
}

impl<B: TableBackend> RecordStore<B> {
    pub async fn try_list<R: Record>(&self, query: &Query) -> Result<Vec<R>, StoreError> {
        self.backend()
            .select(R::TABLE, query)
            .await?
            .into_iter()
            .map(R::decode)
            .collect()
    }

    /// Like [`Self::try_list`], but a failure is logged and yields an empty list.
    pub async fn list<R: Record>(&self, query: &Query) -> Vec<R> {
        match self.try_list(query).await {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(table = R::TABLE, %error, "list failed");
                Vec::new()
            }
        }
    }

    pub async fn try_get<R: Record>(&self, id: &str) -> Result<Option<R>, StoreError> {
        let rows = self
            .backend()
            .select(R::TABLE, &Query::new().eq("id", id))
            .await?;
        rows.into_iter().next().map(R::decode).transpose()
    }

    /// Like [`Self::try_get`], but a failure is logged and yields `None`.
    pub async fn get<R: Record>(&self, id: &str) -> Option<R> {
        match self.try_get(id).await {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(table = R::TABLE, id, %error, "get failed");
                None
            }
        }
    }

    /// Insert a storage-cased payload and return the stored record.
    ///
    /// # Errors
    ///
    /// Propagates any backend or decode error.
    pub async fn insert<R: Record>(&self, payload: &impl Serialize) -> Result<R, StoreError> {
        let row = self
            .backend()
            .insert(R::TABLE, serde_json::to_value(payload)?)
            .await?;
        R::decode(row)
    }

    /// Apply a sparse patch and return the stored record.
    ///
    /// An empty patch sends nothing and returns the current record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has `id`, or any backend error.
    pub async fn patch<R: Record>(
        &self,
        id: &str,
        patch: &impl Serialize,
    ) -> Result<R, StoreError> {
        let patch = serde_json::to_value(patch)?;
        let not_found = || StoreError::NotFound {
            table: R::TABLE,
            id: id.to_string(),
        };

        if patch.as_object().is_some_and(serde_json::Map::is_empty) {
            return self.try_get(id).await?.ok_or_else(not_found);
        }

        match self.backend().update(R::TABLE, id, patch).await? {
            Some(row) => R::decode(row),
            None => Err(not_found()),
        }
    }

    pub async fn try_remove<R: Record>(&self, id: &str) -> Result<(), StoreError> {
        self.backend().delete(R::TABLE, id).await
    }

    /// Delete by id. A failure is logged and yields `false`.
    pub async fn remove<R: Record>(&self, id: &str) -> bool {
        match self.try_remove::<R>(id).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(table = R::TABLE, id, %error, "delete failed");
                false
            }
        }
    }
}
