use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let company = ctx
        .store
        .get_company(id)
        .await
        .ok_or_else(|| anyhow::anyhow!("company not found: {id}"))?;
    output(&company, flags.format)
}
