//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// API test helpers: request replay, response validation and token utilities.
#[derive(Parser, Debug)]
#[command(name = "ptf", version)]
pub struct Args {
    /// Globals file shared by every invocation of a test run.
    #[arg(long, global = true, env = "PTF_GLOBALS_PATH")]
    pub globals: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the slug of a text.
    Slugify {
        /// Text to slugify.
        text: String,
    },

    /// Print the JSON payload of a structured token (e.g. a JWT).
    DecodeToken {
        /// The dot-delimited token.
        token: String,
    },

    /// Trigger a replay of a request step and print the next step.
    Replay(ReplayArgs),

    /// Validate an options/list response and print every assertion.
    ValidateOptions(ValidateArgs),

    /// Read or write a single global.
    #[command(subcommand)]
    Globals(GlobalsCommand),
}

/// Arguments of `ptf replay`.
#[derive(ClapArgs, Debug, Clone)]
pub struct ReplayArgs {
    /// Step the host should run again.
    #[arg(long)]
    pub target: String,

    /// Endpoint display name; its slug keys the replay count.
    #[arg(long)]
    pub name: String,

    /// Number of replays armed on the first trigger.
    #[arg(long, default_value_t = 1)]
    pub times: u32,

    /// Explicit replay key, used instead of the slug of `--name`.
    #[arg(long)]
    pub key: Option<String>,
}

/// Arguments of `ptf validate-options`.
#[derive(ClapArgs, Debug, Clone)]
pub struct ValidateArgs {
    /// Endpoint display name used in assertion labels.
    #[arg(long)]
    pub name: String,

    /// Top-level response property holding the options.
    #[arg(long)]
    pub key: String,

    /// Property under `--key` holding the list.
    #[arg(long)]
    pub options_key: Option<String>,

    /// The endpoint takes a search query.
    #[arg(long)]
    pub expects_query: bool,

    /// Value of the request's `format` scope header.
    #[arg(long)]
    pub scope: Option<String>,

    /// Response status code.
    #[arg(long, default_value_t = 200)]
    pub status: u16,

    /// File holding the raw JSON response body.
    #[arg(long)]
    pub response: PathBuf,

    /// File holding the raw JSON request body.
    #[arg(long)]
    pub request: Option<PathBuf>,
}

/// `ptf globals` subcommands.
#[derive(Subcommand, Debug)]
pub enum GlobalsCommand {
    /// Print a global; exits with 1 if it is not set.
    Get {
        /// Global key.
        key: String,
    },
    /// Set a global.
    Set {
        /// Global key.
        key: String,
        /// Value stored verbatim.
        value: String,
    },
    /// Remove a global; exits with 1 if it was not set.
    Remove {
        /// Global key.
        key: String,
    },
}
