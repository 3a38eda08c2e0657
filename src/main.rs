//! CLI entry point for tinta

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tinta")]
#[command(version)]
#[command(about = "Content engine for a bilingual portfolio and technical blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post by slug
    Show {
        /// Slug of the post to show
        slug: String,
    },

    /// List pre-render routes for static generation
    Routes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tinta=debug,info"
    } else {
        "tinta=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let site = tinta::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            tinta::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { slug } => {
            tinta::commands::show::run(&site, &slug)?;
        }

        Commands::Routes => {
            tinta::commands::routes::run(&site)?;
        }
    }

    Ok(())
}
