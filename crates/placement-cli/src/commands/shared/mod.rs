pub mod limit;
pub mod session;
