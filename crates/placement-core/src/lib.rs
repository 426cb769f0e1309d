//! # placement-core
//!
//! Core types shared across the placement admin crates.
//!
//! This crate provides:
//! - Entity structs for the published records (jobs, companies, testimonials)
//!   and the session user
//! - Degree level and admin role enums
//! - The job filter applied to listings
//! - Dashboard statistics derived from fetched records
//! - Admin form helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod stats;
