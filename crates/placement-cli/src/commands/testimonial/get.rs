use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let testimonial = ctx
        .store
        .get_testimonial(id)
        .await
        .ok_or_else(|| anyhow::anyhow!("testimonial not found: {id}"))?;
    output(&testimonial, flags.format)
}
