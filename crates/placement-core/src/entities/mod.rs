//! Entity structs for the placement domain.
//!
//! Each published entity maps to a backend table (`jobs`, `companies`,
//! `testimonials`). Domain structs serialize with camelCase field names;
//! the storage-cased row shapes live in `placement-store`.

mod company;
mod job;
mod session_user;
mod testimonial;

pub use company::{Company, NewCompany};
pub use job::{Job, NewJob, NO_DIRECT_LINK};
pub use session_user::SessionUser;
pub use testimonial::{NewTestimonial, Testimonial};
