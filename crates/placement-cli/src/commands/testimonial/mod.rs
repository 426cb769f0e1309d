mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TestimonialCommands;
use crate::context::AdminContext;

/// Handle `placement testimonial`.
pub async fn handle(
    action: &TestimonialCommands,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TestimonialCommands::List { featured } => list::run(*featured, ctx, flags).await,
        TestimonialCommands::Get { id } => get::run(id, ctx, flags).await,
        TestimonialCommands::Create {
            name,
            role,
            company,
            message,
            image,
            featured,
        } => {
            let params = create::Params {
                name,
                role,
                company,
                message,
                image,
                featured: *featured,
            };
            create::run(&params, ctx, flags).await
        }
        TestimonialCommands::Update {
            id,
            name,
            role,
            company,
            message,
            image,
            featured,
        } => {
            let params = update::Params {
                name: name.as_deref(),
                role: role.as_deref(),
                company: company.as_deref(),
                message: message.as_deref(),
                image: image.as_deref(),
                featured: *featured,
            };
            update::run(id, &params, ctx, flags).await
        }
        TestimonialCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
