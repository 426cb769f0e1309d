use placement_core::enums::DegreeFilter;
use placement_core::filter::filter_jobs;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, take_limit};
use crate::context::AdminContext;
use crate::output::output;

pub fn run(
    search: Option<&str>,
    degree: DegreeFilter,
    ctx: &AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let matching = filter_jobs(ctx.jobs(), search.unwrap_or_default(), degree);
    let jobs = take_limit(matching, limit);
    output(&jobs, flags.format)
}
