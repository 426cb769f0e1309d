use placement_core::entities::NewJob;
use placement_core::enums::DegreeLevel;
use placement_core::forms::parse_requirements;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

pub struct Params<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub degree: DegreeLevel,
    /// Comma-separated form value.
    pub requirements: &'a str,
    pub description: &'a str,
    pub salary_range: &'a str,
    pub application_url: Option<&'a str>,
}

pub async fn run(
    params: &Params<'_>,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let job = ctx.add_job(&new_job(params)).await?;
    output(&job, flags.format)
}

fn new_job(params: &Params<'_>) -> NewJob {
    NewJob {
        title: params.title.trim().to_string(),
        company: params.company.trim().to_string(),
        location: params.location.trim().to_string(),
        degree_level: params.degree,
        requirements: parse_requirements(params.requirements),
        description: params.description.to_string(),
        salary_range: params.salary_range.trim().to_string(),
        application_url: params.application_url.unwrap_or_default().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params<'a>(requirements: &'a str, application_url: Option<&'a str>) -> Params<'a> {
        Params {
            title: " Data Analyst ",
            company: "Acme",
            location: "Pune",
            degree: DegreeLevel::Diploma,
            requirements,
            description: "SQL dashboards",
            salary_range: "4-6 LPA",
            application_url,
        }
    }

    #[test]
    fn requirements_are_split_from_the_form_value() {
        let job = new_job(&params("SQL, Excel ,,Power BI", None));
        assert_eq!(job.requirements, vec!["SQL", "Excel", "Power BI"]);
        assert_eq!(job.title, "Data Analyst");
    }

    #[test]
    fn missing_application_url_becomes_empty() {
        assert_eq!(new_job(&params("", None)).application_url, "");
        assert_eq!(
            new_job(&params("", Some("https://acme.example/apply"))).application_url,
            "https://acme.example/apply"
        );
    }
}
