//! In-memory table backend for tests.
//!
//! Rows are kept as storage-cased JSON objects. Inserts receive the same
//! column defaults the hosted schema applies, a generated `id`, and
//! `created_at`/`updated_at` stamps. Ordering ties are broken by insertion
//! order so newest-first listings are deterministic.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use serde_json::{Map, Value, json};

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct State {
    tables: HashMap<String, Vec<StoredRow>>,
    next_seq: u64,
    unavailable: bool,
    access_token: Option<String>,
}

#[derive(Debug, Clone)]
struct StoredRow {
    seq: u64,
    columns: Map<String, Value>,
}

/// A `TableBackend` that keeps every table in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a 503, or restore service.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = unavailable;
        }
    }

    /// Insert a raw row as if it already existed on the server.
    ///
    /// Missing `id` and timestamp columns are filled in.
    pub fn seed(&self, table: &str, row: Value) {
        if let Ok(mut state) = self.state.lock() {
            let Value::Object(columns) = row else {
                return;
            };
            state.push(table, columns);
        }
    }

    /// Snapshot of a table's raw rows, in insertion order.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.state
            .lock()
            .map(|state| {
                state
                    .tables
                    .get(table)
                    .map(|rows| {
                        rows.iter()
                            .map(|r| Value::Object(r.columns.clone()))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// The bearer token most recently attached through `set_access_token`.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.access_token.clone())
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| StoreError::InvalidState("memory backend lock poisoned".into()))?;
        if state.unavailable {
            return Err(StoreError::Api {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        f(&mut state)
    }
}

impl State {
    fn push(&mut self, table: &str, mut columns: Map<String, Value>) -> Map<String, Value> {
        self.next_seq += 1;
        let seq = self.next_seq;
        let now = Utc::now();
        for (column, default) in column_defaults(table) {
            columns.entry(column).or_insert(default);
        }
        columns
            .entry("id")
            .or_insert_with(|| Value::String(format!("{table}-{seq}")));
        if table == "jobs" {
            columns
                .entry("posted_date")
                .or_insert_with(|| Value::String(now.date_naive().to_string()));
        }
        columns
            .entry("created_at")
            .or_insert_with(|| Value::String(now.to_rfc3339()));
        columns
            .entry("updated_at")
            .or_insert_with(|| Value::String(now.to_rfc3339()));
        self.tables
            .entry(table.to_string())
            .or_default()
            .push(StoredRow {
                seq,
                columns: columns.clone(),
            });
        columns
    }
}

/// Server-side defaults of the hosted schema.
fn column_defaults(table: &str) -> Vec<(String, Value)> {
    let defaults = match table {
        "jobs" => json!({ "requirements": [], "application_url": "" }),
        "companies" => json!({ "placement_count": 0, "is_partner": false, "website_url": null }),
        "testimonials" => json!({ "is_featured": false }),
        "admin_users" => json!({ "role": "admin" }),
        _ => json!({}),
    };
    match defaults {
        Value::Object(map) => map.into_iter().collect(),
        _ => Vec::new(),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

impl TableBackend for MemoryBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, StoreError> {
        self.with_state(|state| {
            let mut rows: Vec<StoredRow> = state
                .tables
                .get(table)
                .map(|rows| {
                    rows.iter()
                        .filter(|row| {
                            query
                                .filters
                                .iter()
                                .all(|(column, value)| row.columns.get(column) == Some(value))
                        })
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            if let Some(order) = &query.order {
                rows.sort_by(|a, b| {
                    let by_column =
                        compare_values(a.columns.get(&order.column), b.columns.get(&order.column))
                            .then(a.seq.cmp(&b.seq));
                    if order.ascending {
                        by_column
                    } else {
                        by_column.reverse()
                    }
                });
            }

            Ok(rows.into_iter().map(|r| Value::Object(r.columns)).collect())
        })
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.with_state(|state| {
            let Value::Object(columns) = row else {
                return Err(StoreError::Api {
                    status: 400,
                    message: "insert payload must be a JSON object".into(),
                });
            };
            Ok(Value::Object(state.push(table, columns)))
        })
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        patch: Value,
    ) -> Result<Option<Value>, StoreError> {
        self.with_state(|state| {
            let Value::Object(patch) = patch else {
                return Err(StoreError::Api {
                    status: 400,
                    message: "update payload must be a JSON object".into(),
                });
            };
            let Some(row) = state.tables.get_mut(table).and_then(|rows| {
                rows.iter_mut()
                    .find(|row| row.columns.get("id").and_then(Value::as_str) == Some(id))
            }) else {
                return Ok(None);
            };
            for (column, value) in patch {
                row.columns.insert(column, value);
            }
            row.columns.insert(
                "updated_at".into(),
                Value::String(Utc::now().to_rfc3339()),
            );
            Ok(Some(Value::Object(row.columns.clone())))
        })
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        self.with_state(|state| {
            if let Some(rows) = state.tables.get_mut(table) {
                rows.retain(|row| row.columns.get("id").and_then(Value::as_str) != Some(id));
            }
            Ok(())
        })
    }

    fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.access_token = token;
        }
    }
}
