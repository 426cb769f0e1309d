use clap::{Args, Subcommand};

/// Admin session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in as the site admin.
    Login(AuthLoginArgs),
    /// End the admin session and clear the stored token.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
}
