//! HTTP transport for the acyclicity checker.
//!
//! Two routes: a liveness probe on `/` and the parse endpoint on
//! `/pipelines/parse`. Handlers are stateless wrappers over [`graph::check`];
//! each request is deserialized, checked, and dropped.

use crate::error::{PipelineError, Result};
use crate::graph;
use crate::models::{PipelineRequest, PipelineResponse};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Bind address and cross-origin allow-list for the service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to make cross-site requests. Empty means same-origin
    /// only.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the application router.
///
/// Fails only on an allow-list entry that is not a valid header value.
pub fn router(config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origins)?;

    Ok(Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Liveness probe with a fixed acknowledgment payload.
async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// Validate a pipeline graph and report its size and acyclicity.
///
/// Malformed bodies never reach this handler; the `Json` extractor answers
/// them with a client error first.
async fn parse_pipeline(Json(request): Json<PipelineRequest>) -> Json<PipelineResponse> {
    let check = graph::check(&request.nodes, &request.edges);
    tracing::debug!(
        num_nodes = check.node_count,
        num_edges = check.edge_count,
        is_dag = check.is_dag,
        "pipeline parsed"
    );
    Json(PipelineResponse::from(check))
}

/// Cross-origin policy: an explicit origin allow-list with credentials.
///
/// Methods and headers mirror the preflight request; a wildcard is not
/// allowed next to credentials.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| PipelineError::InvalidOrigin {
                origin: origin.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Bind and serve until the process is terminated.
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = router(&config)?;
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
