mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::sync::Arc;

use anyhow::Result;

use crate::config::TweetqlConfig;
use crate::graphql::{TweetqlSchema, build_schema};
use crate::storage::Repository;
use crate::upstream::MovieClient;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TweetqlConfig,
}

impl CommandContext {
    pub fn new(config: TweetqlConfig) -> Self {
        Self { config }
    }

    /// Schema over a freshly seeded store and the live movie client.
    pub fn schema(&self) -> Result<TweetqlSchema> {
        let repo = Arc::new(Repository::seeded());
        let movies = Arc::new(MovieClient::new(&self.config.upstream)?);
        Ok(build_schema(repo, movies))
    }
}

/// Run one request through the schema and print the JSON response.
fn execute_and_print(
    schema: &TweetqlSchema,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
