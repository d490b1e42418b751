pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod models;
pub mod server;

pub use error::{PipelineError, Result};
pub use models::*;
