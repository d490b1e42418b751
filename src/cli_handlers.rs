use crate::graph;
use crate::models::{PipelineRequest, PipelineResponse};
use crate::server::{self, ServerConfig};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Handle the serve command
pub async fn handle_serve(host: String, port: u16, allow_origins: Vec<String>) -> Result<()> {
    let config = ServerConfig {
        host,
        port,
        allowed_origins: allow_origins,
    };
    server::run(config).await?;
    Ok(())
}

/// Handle the check command
///
/// One-shot version of the parse endpoint: reads a pipeline document from a
/// file or stdin and prints the response JSON on stdout.
pub fn handle_check(file: Option<&Path>) -> Result<()> {
    let payload = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => io::read_to_string(io::stdin()).context("reading stdin")?,
    };

    let request = PipelineRequest::from_json(&payload).context("parsing pipeline document")?;

    let check = graph::check(&request.nodes, &request.edges);
    let response = PipelineResponse::from(check);

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
