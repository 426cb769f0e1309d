use placement_store::updates::{CompanyUpdate, CompanyUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Default)]
pub struct Params<'a> {
    pub name: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub description: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub employees: Option<&'a str>,
    pub placement_count: Option<u32>,
    /// `Some(None)` clears the website.
    pub website_url: Option<Option<&'a str>>,
    pub partner: Option<bool>,
}

pub async fn run(
    id: &str,
    params: &Params<'_>,
    ctx: &AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let update = build_update(params)?;
    let company = ctx.store.update_company(id, &update).await?;
    output(&company, flags.format)
}

fn build_update(params: &Params<'_>) -> anyhow::Result<CompanyUpdate> {
    let mut builder = CompanyUpdateBuilder::new();
    if let Some(name) = params.name {
        builder = builder.name(name.trim());
    }
    if let Some(logo) = params.logo {
        builder = builder.logo(logo.trim());
    }
    if let Some(description) = params.description {
        builder = builder.description(description);
    }
    if let Some(industry) = params.industry {
        builder = builder.industry(industry.trim());
    }
    if let Some(employees) = params.employees {
        builder = builder.employees(employees.trim());
    }
    if let Some(placement_count) = params.placement_count {
        builder = builder.placement_count(placement_count);
    }
    if let Some(website_url) = params.website_url {
        let website_url = website_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);
        builder = builder.website_url(website_url);
    }
    if let Some(partner) = params.partner {
        builder = builder.is_partner(partner);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --name, --logo, --description, --industry, --employees, \
             --placement-count, --website-url, --clear-website, or --partner must be provided"
        );
    }
    Ok(update)
}
