//! # tweetql - a small GraphQL server
//!
//! tweetql serves tweets and users from an in-memory store and passes movie
//! records through from a third-party movie-listing API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on http://127.0.0.1:4000 (GraphiQL on GET /)
//! tweetql serve
//!
//! # One-off query against a freshly seeded store
//! tweetql query '{ tweet(id: "1") { text author { fullName } } }'
//!
//! # Print the schema
//! tweetql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Tweet, User, Movie)
//! - [`storage`]: In-memory repository store
//! - [`upstream`]: Movie-listing API client

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `.tweetql.yml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TweetqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and server.
pub mod graphql;

pub mod logging;

/// Data models: `Tweet`, `User` and `Movie`.
pub mod model;

/// In-memory repository store.
pub mod storage;

/// Client for the upstream movie-listing API.
pub mod upstream;
