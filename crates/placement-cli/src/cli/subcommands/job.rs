use clap::Subcommand;
use placement_core::enums::{DegreeFilter, DegreeLevel};

/// Job posting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// List jobs, newest first.
    List {
        /// Case-insensitive match on title, company or location.
        #[arg(long)]
        search: Option<String>,
        /// All, Diploma, Bachelor or Master.
        #[arg(long, default_value = "All")]
        degree: DegreeFilter,
    },
    /// Get a job by ID.
    Get { id: String },
    /// Post a new job.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        degree: DegreeLevel,
        /// Comma-separated list.
        #[arg(long, default_value = "")]
        requirements: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        salary_range: String,
        #[arg(long)]
        application_url: Option<String>,
    },
    /// Update fields of a job.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        degree: Option<DegreeLevel>,
        /// Comma-separated list; replaces the current requirements.
        #[arg(long)]
        requirements: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        salary_range: Option<String>,
        #[arg(long)]
        application_url: Option<String>,
    },
    /// Delete a job.
    Delete { id: String },
    /// Totals, recent postings and degree breakdown.
    Stats,
}
