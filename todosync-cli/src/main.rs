//! Todosync CLI - Command line interface for Todosync
//!
//! Turns the unchecked items of a todo.md checklist into issue drafts.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todosync_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ExportArgs, IssuesArgs, LabelsArgs, SyncArgs};

/// Todosync: turn todo.md checklists into GitHub issue drafts
#[derive(Parser, Debug)]
#[command(name = "todosync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.config/todosync/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the todo file (overrides config and env)
    #[arg(short, long, global = true, env = "TODOSYNC_TODO_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Parse, summarize, export and list the issues to create
    #[command(visible_alias = "s")]
    Sync(SyncArgs),

    /// Export unchecked tasks as JSON
    Export(ExportArgs),

    /// Show issue drafts for every unchecked task
    #[command(visible_alias = "i")]
    Issues(IssuesArgs),

    /// Show labels in use and tasks per category
    Labels(LabelsArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.config.as_deref(), cli.file.clone(), None)?;

    if cli.verbose {
        tracing::info!(
            todo_file = %config.input.todo_file.display(),
            export_file = %config.output.export_file.display(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("todosync {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Sync(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Export(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Issues(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Labels(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Config) => {
            println!("Todosync Configuration");
            println!("======================");
            println!();
            println!("Input:");
            println!("  todo_file: {}", config.input.todo_file.display());
            println!();
            println!("Output:");
            println!("  export_file: {}", config.output.export_file.display());
            println!();
            println!("Summary:");
            println!("  preview_tasks: {}", config.summary.preview_tasks);
            println!("  preview_width: {}", config.summary.preview_width);
            println!("  body_preview_issues: {}", config.summary.body_preview_issues);
            println!("  body_preview_width: {}", config.summary.body_preview_width);
            println!();
            let path = cli.config.clone().or_else(Config::default_config_path);
            if let Some(path) = path {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Todosync - turn todo.md checklists into GitHub issue drafts");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
