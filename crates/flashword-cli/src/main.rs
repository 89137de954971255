//! flashword CLI — the terminal front end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "flashword", version, about = "Vocabulary flashcards in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice words, resuming the last active user
    Play {
        /// Log in as this user instead of resuming
        #[arg(long)]
        user: Option<String>,

        /// Path to a .toml word catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Store file path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List stored users and their progress
    Users {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Store file path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the words in a catalog
    Words {
        /// Path to a .toml word catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a catalog TOML file
    Validate {
        /// Path to the catalog file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Forget the last active user so the next session asks for a name
    Logout {
        /// Store file path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flashword_core=warn,flashword_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            user,
            catalog,
            store,
            config,
        } => commands::play::execute(user, catalog, store, config),
        Commands::Users {
            format,
            store,
            config,
        } => commands::users::execute(format, store, config),
        Commands::Words { catalog, config } => commands::words::execute(catalog, config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Logout { store, config } => commands::logout::execute(store, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
