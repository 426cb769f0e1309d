use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

pub async fn run(ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.store.try_job_stats().await?;
    output(&stats, flags.format)
}
