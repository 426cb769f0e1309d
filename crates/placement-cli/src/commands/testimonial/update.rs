use placement_store::updates::{TestimonialUpdate, TestimonialUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_admin;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Default)]
pub struct Params<'a> {
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub company: Option<&'a str>,
    pub message: Option<&'a str>,
    pub image: Option<&'a str>,
    pub featured: Option<bool>,
}

pub async fn run(
    id: &str,
    params: &Params<'_>,
    ctx: &AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let update = build_update(params)?;
    let testimonial = ctx.store.update_testimonial(id, &update).await?;
    output(&testimonial, flags.format)
}

fn build_update(params: &Params<'_>) -> anyhow::Result<TestimonialUpdate> {
    let mut builder = TestimonialUpdateBuilder::new();
    if let Some(name) = params.name {
        builder = builder.name(name.trim());
    }
    if let Some(role) = params.role {
        builder = builder.role(role.trim());
    }
    if let Some(company) = params.company {
        builder = builder.company(company.trim());
    }
    if let Some(message) = params.message {
        builder = builder.message(message.trim());
    }
    if let Some(image) = params.image {
        builder = builder.image(image.trim());
    }
    if let Some(featured) = params.featured {
        builder = builder.is_featured(featured);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --name, --role, --company, --message, --image, or --featured must be provided"
        );
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_empty_update() {
        assert!(build_update(&Params::default()).is_err());
    }

    #[test]
    fn unfeaturing_sends_only_the_flag() {
        let update = build_update(&Params {
            featured: Some(false),
            ..Params::default()
        })
        .unwrap();
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "is_featured": false }));
    }
}
