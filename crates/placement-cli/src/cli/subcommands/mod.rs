pub mod auth;
pub mod company;
pub mod job;
pub mod testimonial;

pub use auth::AuthCommands;
pub use company::CompanyCommands;
pub use job::JobCommands;
pub use testimonial::TestimonialCommands;
