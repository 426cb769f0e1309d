use placement_core::entities::NewTestimonial;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

pub struct Params<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub company: &'a str,
    pub message: &'a str,
    pub image: &'a str,
    pub featured: bool,
}

pub async fn run(
    params: &Params<'_>,
    ctx: &AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    if params.message.trim().is_empty() {
        anyhow::bail!("--message must not be empty");
    }
    let testimonial = NewTestimonial {
        name: params.name.trim().to_string(),
        role: params.role.trim().to_string(),
        company: params.company.trim().to_string(),
        message: params.message.trim().to_string(),
        image: params.image.trim().to_string(),
        is_featured: params.featured,
    };
    let created = ctx.store.create_testimonial(&testimonial).await?;
    output(&created, flags.format)
}
