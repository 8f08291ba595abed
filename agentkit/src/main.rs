mod cli;

use agentkit_core::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agentkit",
    version,
    about = "agentkit: coarse User-Agent classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single user agent
    Classify {
        /// Agent to classify; defaults to the CGI `HTTP_USER_AGENT` variable
        #[arg(env = "HTTP_USER_AGENT")]
        agent: Option<String>,

        /// Raw query string to read the app-installed flag from
        #[arg(long)]
        query: Option<String>,

        /// In-app browser signature (defaults to the configured one)
        #[arg(long)]
        signature: Option<String>,

        /// Print integer codes instead of names
        #[arg(long)]
        codes: bool,

        /// Path to an agentkit config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Classify one user agent per stdin line
    Batch {
        #[arg(long)]
        codes: bool,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Classify {
            agent,
            query,
            signature,
            codes,
            config,
        } => cli::classify::run(cli::classify::ClassifyArgs {
            agent,
            query,
            signature,
            codes,
            config,
        }),

        Command::Batch { codes, config } => cli::batch::run(codes, config),

        Command::Config { cmd } => cli::config::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("agentkit error: {e:#}");
        std::process::exit(1);
    }
}
