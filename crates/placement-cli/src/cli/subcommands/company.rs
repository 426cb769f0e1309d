use clap::{ArgAction, Subcommand};

/// Company commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List companies. `--partners` shows partners by placement count.
    List {
        #[arg(long)]
        partners: bool,
    },
    /// Get a company by ID.
    Get { id: String },
    /// Add a company.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        logo: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        employees: String,
        #[arg(long, default_value_t = 0)]
        placement_count: u32,
        #[arg(long)]
        website_url: Option<String>,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        partner: bool,
    },
    /// Update fields of a company.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        employees: Option<String>,
        #[arg(long)]
        placement_count: Option<u32>,
        #[arg(long, conflicts_with = "clear_website")]
        website_url: Option<String>,
        #[arg(long)]
        clear_website: bool,
        #[arg(long)]
        partner: Option<bool>,
    },
    /// Delete a company.
    Delete { id: String },
    /// Company, placement and partner totals.
    Stats,
}
