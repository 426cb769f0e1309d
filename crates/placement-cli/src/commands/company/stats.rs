use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

pub async fn run(ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.company_stats().await, flags.format)
}
