use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take_limit};
use crate::context::AdminContext;
use crate::output::output;

/// Partners come back by placement count, everything else newest first.
pub async fn run(partners: bool, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let companies = if partners {
        ctx.store.list_partner_companies().await
    } else {
        ctx.store.list_companies().await
    };
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    output(&take_limit(companies, limit), flags.format)
}
