use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(about = "DAG validation for pipeline graphs")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP validation service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Origin allowed to make cross-site requests (repeatable)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origins: Vec<String>,
    },

    /// Check one pipeline document and print the result
    Check {
        /// Path to a JSON document with `nodes` and `edges` (stdin when omitted)
        file: Option<PathBuf>,
    },
}
