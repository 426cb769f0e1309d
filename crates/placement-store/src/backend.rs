//! The table backend seam.
//!
//! A `TableBackend` speaks in storage-cased JSON rows. Typed translation
//! happens one layer up in [`crate::record`].

use serde_json::Value;

use crate::error::StoreError;

/// Column ordering for a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Equality filters plus an optional ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending: false,
        });
        self
    }

    #[must_use]
    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending: true,
        });
        self
    }

    /// Newest-created first, the default listing order.
    #[must_use]
    pub fn newest_first() -> Self {
        Self::new().order_desc("created_at")
    }
}

/// A remote (or in-memory) table service addressed by table name and row id.
///
/// Implementations must let the service assign `id` and timestamps on insert,
/// and must return the stored row from `insert` and `update`.
#[allow(async_fn_in_trait)]
pub trait TableBackend {
    /// Select every row matching `query`.
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return it as stored.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Apply `patch` to the row with `id`. Returns `None` when no row matched.
    async fn update(&self, table: &str, id: &str, patch: Value)
    -> Result<Option<Value>, StoreError>;

    /// Delete the row with `id`.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError>;

    /// Attach (or clear) the signed-in user's access token for later requests.
    fn set_access_token(&self, _token: Option<String>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_filters_and_order() {
        let query = Query::new()
            .eq("is_partner", true)
            .order_desc("placement_count");
        assert_eq!(
            query.filters,
            vec![("is_partner".to_string(), Value::Bool(true))]
        );
        assert_eq!(
            query.order,
            Some(Order {
                column: "placement_count".into(),
                ascending: false
            })
        );
    }

    #[test]
    fn newest_first_orders_by_created_at_desc() {
        let order = Query::newest_first().order.unwrap();
        assert_eq!(order.column, "created_at");
        assert!(!order.ascending);
    }
}
