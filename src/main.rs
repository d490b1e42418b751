use clap::Parser;
use pipecheck::cli::{Cli, Commands};
use pipecheck::cli_handlers;
use std::process;

#[tokio::main]
async fn main() {
    // Log level is opt-in via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            allow_origins,
        } => cli_handlers::handle_serve(host, port, allow_origins).await,
        Commands::Check { file } => cli_handlers::handle_check(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
