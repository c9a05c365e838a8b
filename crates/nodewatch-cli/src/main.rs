//! nodewatch CLI
//!
//! Streams cluster node state changes, and renders node balance comparisons.

use clap::{Parser, Subcommand, ValueEnum};
use nodewatch_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "nodewatch")]
#[command(about = "nodewatch - stream cluster node state changes", long_about = None)]
struct Cli {
    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll the node list and print every new or changed node
    Watch(commands::watch::WatchArgs),
    /// Render worker nodes side by side as an HTML table
    Compare(commands::compare::CompareArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Watch(args) => commands::watch::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
