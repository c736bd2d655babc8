//! In-memory storage layer for tweetql.
//!
//! Nothing is persisted: the store is built from seed data at startup and
//! lives as long as the process.
//!
//! ## Components
//!
//! - [`Repository`]: lookup, insertion and removal of tweets; lookup of users

mod repository;

pub use repository::Repository;
