use placement_core::enums::DegreeLevel;
use placement_core::forms::parse_requirements;
use placement_store::updates::{JobUpdate, JobUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Default)]
pub struct Params<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub degree: Option<DegreeLevel>,
    pub requirements: Option<&'a str>,
    pub description: Option<&'a str>,
    pub salary_range: Option<&'a str>,
    pub application_url: Option<&'a str>,
}

pub async fn run(
    id: &str,
    params: &Params<'_>,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let update = build_update(params)?;
    let job = ctx.update_job(id, &update).await?;
    output(&job, flags.format)
}

fn build_update(params: &Params<'_>) -> anyhow::Result<JobUpdate> {
    let mut builder = JobUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title.trim());
    }
    if let Some(company) = params.company {
        builder = builder.company(company.trim());
    }
    if let Some(location) = params.location {
        builder = builder.location(location.trim());
    }
    if let Some(degree) = params.degree {
        builder = builder.degree_level(degree);
    }
    if let Some(requirements) = params.requirements {
        builder = builder.requirements(parse_requirements(requirements));
    }
    if let Some(description) = params.description {
        builder = builder.description(description);
    }
    if let Some(salary_range) = params.salary_range {
        builder = builder.salary_range(salary_range.trim());
    }
    if let Some(application_url) = params.application_url {
        builder = builder.application_url(application_url.trim());
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --title, --company, --location, --degree, --requirements, \
             --description, --salary-range, or --application-url must be provided"
        );
    }
    Ok(update)
}
