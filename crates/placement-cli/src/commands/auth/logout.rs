use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AdminContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    was_authenticated: bool,
}

pub async fn run(ctx: &mut AdminContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_authenticated = ctx.is_authenticated();
    ctx.logout().await;
    output(
        &LogoutResponse {
            logged_out: true,
            was_authenticated,
        },
        flags.format,
    )
}
