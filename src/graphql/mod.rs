//! GraphQL schema, resolvers and HTTP server for tweetql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! tweetql serve --port 4000
//!
//! # Execute a query from CLI
//! tweetql query '{ allTweets { id text author { fullName } } }'
//!
//! # Execute a mutation from CLI
//! tweetql mutate 'postTweet(text: "hello", userId: "1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `allTweets`, `tweet`, `allUsers`, `allMovies`, `movie`
//! - **Mutations**: `postTweet`, `deleteTweet`

mod schema;
mod server;
mod types;

pub use schema::{AppState, MutationRoot, QueryRoot, TweetqlSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
