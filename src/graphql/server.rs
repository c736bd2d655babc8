use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::info;

use super::TweetqlSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `POST /` executes GraphQL requests, `GET /` serves GraphiQL.
pub fn router(schema: TweetqlSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

/// Bind `addr` and serve the schema until the process is stopped.
pub async fn run_server(schema: TweetqlSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(schema)).await?;
    Ok(())
}
