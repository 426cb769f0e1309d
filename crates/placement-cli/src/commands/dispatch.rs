use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AdminContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AdminContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Job { action } => commands::job::handle(&action, ctx, flags).await,
        Commands::Company { action } => commands::company::handle(&action, ctx, flags).await,
        Commands::Testimonial { action } => {
            commands::testimonial::handle(&action, ctx, flags).await
        }
        Commands::Schema(_) => unreachable!("handled before admin context initialization"),
    }
}
