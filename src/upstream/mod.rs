//! Client side of the third-party movie-listing API.
//!
//! This module provides:
//! - [`MovieSource`] trait abstracting where movie records come from
//! - [`MovieClient`] production client talking to the live HTTP API
//! - [`StaticMovies`] in-memory source for tests and offline runs
//!
//! ```ignore
//! use tweetql::upstream::{MovieClient, MovieSource};
//!
//! let client = MovieClient::new(&config.upstream)?;
//! let movies = client.list_movies().await?;
//! ```

mod client;
mod fixture;

pub use client::MovieClient;
pub use fixture::StaticMovies;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Movie;

/// Trait for fetching movie records.
///
/// Resolvers only see this trait, so the live client can be swapped for
/// [`StaticMovies`] in tests.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch the full movie listing, in upstream order.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Fetch a single movie by id.
    ///
    /// Unknown ids are not an error: the upstream's answer is returned as is,
    /// including `None` when it sends no record at all.
    async fn movie(&self, id: &str) -> Result<Option<Movie>>;
}
