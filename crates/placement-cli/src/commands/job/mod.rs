mod create;
mod delete;
mod get;
mod list;
mod stats;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JobCommands;
use crate::context::AdminContext;

/// Handle `placement job`.
pub async fn handle(
    action: &JobCommands,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JobCommands::List { search, degree } => list::run(search.as_deref(), *degree, ctx, flags),
        JobCommands::Get { id } => get::run(id, ctx, flags),
        JobCommands::Create {
            title,
            company,
            location,
            degree,
            requirements,
            description,
            salary_range,
            application_url,
        } => {
            let params = create::Params {
                title,
                company,
                location,
                degree: *degree,
                requirements,
                description,
                salary_range,
                application_url: application_url.as_deref(),
            };
            create::run(&params, ctx, flags).await
        }
        JobCommands::Update {
            id,
            title,
            company,
            location,
            degree,
            requirements,
            description,
            salary_range,
            application_url,
        } => {
            let params = update::Params {
                title: title.as_deref(),
                company: company.as_deref(),
                location: location.as_deref(),
                degree: *degree,
                requirements: requirements.as_deref(),
                description: description.as_deref(),
                salary_range: salary_range.as_deref(),
                application_url: application_url.as_deref(),
            };
            update::run(id, &params, ctx, flags).await
        }
        JobCommands::Delete { id } => delete::run(id, ctx, flags).await,
        JobCommands::Stats => stats::run(ctx, flags).await,
    }
}
