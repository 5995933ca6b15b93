//! lindagrades CLI — grade averages and newly posted exams from LINDA.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "lindagrades",
    version,
    about = "Grade reports for the HS Heilbronn LINDA portal"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ECTS-weighted grade average per study section
    Average,

    /// Print exams that appeared since the last run and update the cache
    NewExams {
        /// Cache file (defaults to `cache_path` from the config)
        #[arg(long)]
        cache: Option<PathBuf>,
    },

    /// List all exam records
    List {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lindagrades=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Average => commands::average::execute(cli.config).await,
        Commands::NewExams { cache } => commands::new_exams::execute(cli.config, cache).await,
        Commands::List { format } => commands::list::execute(cli.config, format).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
