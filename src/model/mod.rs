//! Data models for tweetql.
//!
//! - [`Tweet`]: a short message posted by a user
//! - [`User`]: the (read-only) author of tweets
//! - [`Movie`]: a record owned by the upstream movie-listing service

mod movie;
mod tweet;
mod user;

pub use movie::Movie;
pub(crate) use movie::null_as_default;
pub use tweet::Tweet;
pub use user::User;
