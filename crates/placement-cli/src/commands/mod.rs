pub mod auth;
pub mod company;
pub mod dispatch;
pub mod job;
pub mod schema;
pub mod shared;
pub mod testimonial;
