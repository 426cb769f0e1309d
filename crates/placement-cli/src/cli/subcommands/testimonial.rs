use clap::{ArgAction, Subcommand};

/// Testimonial commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TestimonialCommands {
    /// List testimonials, newest first.
    List {
        #[arg(long)]
        featured: bool,
    },
    /// Get a testimonial by ID.
    Get { id: String },
    /// Add a testimonial.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        featured: bool,
    },
    /// Update fields of a testimonial.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
    },
    /// Delete a testimonial.
    Delete { id: String },
}
