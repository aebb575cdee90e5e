//! CLI module for C.O.R.A
//!
//! Provides command-line interface parsing and handling for the cora-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// C.O.R.A - Contextual Research Assistant
///
/// A research-assistant server with tagged-response parsing, LLM-planned
/// web search, and a small REST API.
#[derive(Parser, Debug)]
#[command(
    name = "cora-server",
    version,
    about = "C.O.R.A - Contextual Research Assistant",
    long_about = "A research-assistant server that plans web searches with an LLM,\n\
                  fans them out in parallel, and parses tagged assistant output\n\
                  into reasoning, final answer, and sources.\n\n\
                  Run without arguments to start the server.",
    after_help = "EXAMPLES:\n    \
                  cora-server                             # Start the server\n    \
                  cora-server parse reply.txt             # Parse a saved model reply\n    \
                  cora-server research -n 3 \\\n        \
                      --context \"discussing Rust async\" \\\n        \
                      --intent \"compare executor designs\"  # Run a one-off research pass"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a saved assistant reply and print its sections
    Parse {
        /// File containing the raw assistant output
        file: PathBuf,

        /// Print the parsed message as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Run a single research pass from the command line
    Research {
        /// Number of search queries to plan and run (2-6)
        #[arg(short = 'n', long, default_value = "3")]
        queries: u8,

        /// Summary of the conversation so far
        #[arg(long, default_value = "")]
        context: String,

        /// The current user intent, in detail
        #[arg(long)]
        intent: String,
    },
}
