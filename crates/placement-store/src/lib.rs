//! # placement-store
//!
//! Record store for the placement site's hosted tables: `jobs`,
//! `companies` and `testimonials`.
//!
//! Domain records from `placement-core` are translated to storage-cased rows
//! here, sent through a [`TableBackend`], and translated back on the way out.
//! The production backend is [`RestBackend`], a PostgREST-style HTTP client.
//!
//! Failure policy: list and get paths log and fall back to empty/`None`,
//! create and update return the error, delete logs and returns `false`.
//! Every soft path has a `try_*` twin returning `Result`.

pub mod backend;
pub mod error;
pub mod helpers;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod record;
pub mod repos;
pub mod rest;
pub mod rows;
pub mod service;
pub mod updates;

pub use backend::{Order, Query, TableBackend};
pub use error::StoreError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryBackend;
pub use record::Record;
pub use rest::RestBackend;
pub use service::RecordStore;
