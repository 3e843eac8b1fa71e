use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "justdoit")]
#[command(about = "JustDoIT - a voice-assisted to-do list")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.justdoit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the desktop app (GUI + voice assistant)
    Gui,

    /// Print all tasks ordered by deadline
    List,

    /// Add a task without opening the GUI
    Add {
        /// Task name
        name: String,

        /// Deadline in YYYY-MM-DD format
        #[arg(long)]
        deadline: String,
    },

    /// Initialize a default ~/.justdoit/config.toml configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::List) => {
            cli::list::list_command(cli.config.as_deref()).await?;
        }
        Some(Commands::Add { name, deadline }) => {
            cli::add::add_command(cli.config.as_deref(), &name, &deadline).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force).await?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI with the voice assistant
            justdoit::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
