use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let deleted = ctx.store.delete_company(id).await;
    output(&DeleteResponse { id, deleted }, flags.format)
}
