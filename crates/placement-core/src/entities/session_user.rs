use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AdminRole;

/// The admin behind an active backend session.
///
/// Produced by `placement-auth`, held by the CLI's `AdminContext`. Only data,
/// no session logic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionUser {
    /// Backend user ID.
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: AdminRole,
}
