use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let job = ctx
        .get_job(id)
        .ok_or_else(|| anyhow::anyhow!("job not found: {id}"))?;
    output(job, flags.format)
}
