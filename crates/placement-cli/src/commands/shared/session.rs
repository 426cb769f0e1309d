use placement_auth::AuthError;
use placement_core::entities::SessionUser;

use crate::context::AdminContext;

/// The logged-in admin, or an error pointing at `placement auth login`.
pub fn require_admin(ctx: &AdminContext) -> anyhow::Result<&SessionUser> {
    ctx.session_user()
        .ok_or_else(|| AuthError::NotAuthenticated.into())
}
