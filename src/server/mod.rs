//! HTTP transport — a single `/graphql` endpoint.
//!
//! POST executes GraphQL documents; GET serves the in-browser playground so
//! the API can be explored without a client. Everything else is delegated
//! to the schema.

use std::net::SocketAddr;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::graphql::ApiSchema;

/// Execute one GraphQL request.
async fn graphql_handler(State(schema): State<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serve the interactive query explorer.
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Build the application router.
pub fn router(schema: ApiSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .with_state(schema)
}

/// Bind the listener and serve requests until the process stops.
pub async fn serve(bind: SocketAddr, schema: ApiSchema) -> Result<()> {
    let app = router(schema);
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %bind, "listening for GraphQL requests");

    axum::serve(listener, app).await?;
    Ok(())
}
