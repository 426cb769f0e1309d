//! Sparse update types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized into the PATCH body, so absent fields are never
//! touched on the stored row. `Some("")` is sent as an empty string.

pub mod company;
pub mod job;
pub mod testimonial;

pub use company::{CompanyUpdate, CompanyUpdateBuilder};
pub use job::{JobUpdate, JobUpdateBuilder};
pub use testimonial::{TestimonialUpdate, TestimonialUpdateBuilder};
