mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AdminContext;

/// Handle `placement auth`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::run(&args.username, &args.password, ctx, flags).await,
        AuthCommands::Logout => logout::run(ctx, flags).await,
        AuthCommands::Status => status::run(ctx, flags),
    }
}
