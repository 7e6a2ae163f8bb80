//! Available subcommands.

use std::path::PathBuf;

use blastconvert_axum::RouteKind;
use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0", env = "BLASTCONVERT_HOST")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000, env = "BLASTCONVERT_PORT")]
        port: u16,
    },

    /// Convert one Java file and print the Playwright code
    Convert {
        /// Java source file
        file: PathBuf,
        /// Model to use instead of the configured default
        #[arg(short, long)]
        model: Option<String>,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer one serverless event read from a file or stdin
    Event {
        /// Treat the event as dedicated to this route
        #[arg(short, long, value_enum)]
        route: Option<RouteArg>,
        /// Event JSON file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List the model catalog
    Models,
}

/// Route names accepted by `event --route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouteArg {
    Health,
    Models,
    Convert,
}

impl From<RouteArg> for RouteKind {
    fn from(route: RouteArg) -> Self {
        match route {
            RouteArg::Health => Self::Health,
            RouteArg::Models => Self::Models,
            RouteArg::Convert => Self::Convert,
        }
    }
}
