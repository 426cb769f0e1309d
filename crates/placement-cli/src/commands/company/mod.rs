mod create;
mod delete;
mod get;
mod list;
mod stats;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AdminContext;

/// Handle `placement company`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::List { partners } => list::run(*partners, ctx, flags).await,
        CompanyCommands::Get { id } => get::run(id, ctx, flags).await,
        CompanyCommands::Create {
            name,
            logo,
            description,
            industry,
            employees,
            placement_count,
            website_url,
            partner,
        } => {
            let params = create::Params {
                name,
                logo,
                description,
                industry,
                employees,
                placement_count: *placement_count,
                website_url: website_url.as_deref(),
                partner: *partner,
            };
            create::run(&params, ctx, flags).await
        }
        CompanyCommands::Update {
            id,
            name,
            logo,
            description,
            industry,
            employees,
            placement_count,
            website_url,
            clear_website,
            partner,
        } => {
            let website_url = if *clear_website {
                Some(None)
            } else {
                website_url.as_deref().map(Some)
            };
            let params = update::Params {
                name: name.as_deref(),
                logo: logo.as_deref(),
                description: description.as_deref(),
                industry: industry.as_deref(),
                employees: employees.as_deref(),
                placement_count: *placement_count,
                website_url,
                partner: *partner,
            };
            update::run(id, &params, ctx, flags).await
        }
        CompanyCommands::Delete { id } => delete::run(id, ctx, flags).await,
        CompanyCommands::Stats => stats::run(ctx, flags).await,
    }
}
