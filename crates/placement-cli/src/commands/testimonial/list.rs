use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take_limit};
use crate::context::AdminContext;
use crate::output::output;

pub async fn run(featured: bool, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let testimonials = if featured {
        ctx.store.list_featured_testimonials().await
    } else {
        ctx.store.list_testimonials().await
    };
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    output(&take_limit(testimonials, limit), flags.format)
}
