mod admin_context;

pub use admin_context::AdminContext;
