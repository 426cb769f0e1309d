use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthCommands, CompanyCommands, JobCommands, TestimonialCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Admin session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Job postings.
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Hiring and partner companies.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Student testimonials.
    Testimonial {
        #[command(subcommand)]
        action: TestimonialCommands,
    },
    /// Dump the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Job,
    Company,
    Testimonial,
    SessionUser,
}

/// Arguments for `placement schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: SchemaType,
}
