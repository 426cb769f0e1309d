use placement_core::entities::NewCompany;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

pub struct Params<'a> {
    pub name: &'a str,
    pub logo: &'a str,
    pub description: &'a str,
    pub industry: &'a str,
    pub employees: &'a str,
    pub placement_count: u32,
    pub website_url: Option<&'a str>,
    pub partner: bool,
}

pub async fn run(
    params: &Params<'_>,
    ctx: &AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let company = ctx.store.create_company(&new_company(params)).await?;
    output(&company, flags.format)
}

fn new_company(params: &Params<'_>) -> NewCompany {
    NewCompany {
        name: params.name.trim().to_string(),
        logo: params.logo.trim().to_string(),
        description: params.description.to_string(),
        industry: params.industry.trim().to_string(),
        employees: params.employees.trim().to_string(),
        placement_count: params.placement_count,
        website_url: params
            .website_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from),
        is_partner: params.partner,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params(website_url: Option<&str>) -> Params<'_> {
        Params {
            name: "Acme",
            logo: "",
            description: "",
            industry: "IT",
            employees: "1000-5000",
            placement_count: 12,
            website_url,
            partner: true,
        }
    }

    #[test]
    fn blank_website_is_omitted() {
        assert_eq!(new_company(&params(Some("  "))).website_url, None);
        assert_eq!(new_company(&params(None)).website_url, None);
        assert_eq!(
            new_company(&params(Some("https://acme.example"))).website_url.as_deref(),
            Some("https://acme.example")
        );
    }
}
