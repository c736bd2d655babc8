use crate::{
    error::{Result, TweetqlError},
    model::{Tweet, User},
};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Tweets plus the id allocator, guarded together so that an insert sees a
/// consistent count.
struct TweetTable {
    tweets: Vec<Tweet>,
    /// `None` once the id space is used up.
    next_id: Option<u64>,
}

/// In-memory store for tweets and users.
///
/// Constructed once at startup and shared with the resolvers through an
/// `Arc`. Users are fixed at construction; tweets can be appended and removed.
pub struct Repository {
    tweets: RwLock<TweetTable>,
    users: Vec<User>,
}

impl Repository {
    pub fn new(tweets: Vec<Tweet>, users: Vec<User>) -> Self {
        // Start past every numeric id already present so deletions never
        // free an id for reuse.
        let highest = tweets
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest.max(tweets.len() as u64).checked_add(1);

        Self {
            tweets: RwLock::new(TweetTable { tweets, next_id }),
            users,
        }
    }

    /// The store every server starts with: two tweets by a single user.
    pub fn seeded() -> Self {
        Self::new(
            vec![Tweet::new("1", "first", "1"), Tweet::new("2", "second", "1")],
            vec![User::new("1", "kyeongseo", "kang")],
        )
    }

    // A panicking writer cannot leave the table half-updated (every mutation
    // is a single push or retain), so poisoning is safe to ignore.
    fn read(&self) -> RwLockReadGuard<'_, TweetTable> {
        self.tweets.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, TweetTable> {
        self.tweets.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list_tweets(&self) -> Vec<Tweet> {
        self.read().tweets.clone()
    }

    pub fn find_tweet(&self, id: &str) -> Option<Tweet> {
        self.read().tweets.iter().find(|t| t.id == id).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn find_user(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Append a tweet authored by `user_id`.
    ///
    /// Fails with [`TweetqlError::UnknownUser`] and leaves the store untouched
    /// when no such user exists, or with [`TweetqlError::IdsExhausted`] once
    /// `u64::MAX` has been handed out.
    pub fn insert_tweet(&self, text: &str, user_id: &str) -> Result<Tweet> {
        if self.find_user(user_id).is_none() {
            warn!(user_id, "User does not exist, tweet not posted");
            return Err(TweetqlError::UnknownUser(user_id.to_string()));
        }

        let mut table = self.write();
        let id = table.next_id.ok_or(TweetqlError::IdsExhausted)?;
        table.next_id = id.checked_add(1);
        let tweet = Tweet::new(id.to_string(), text, user_id);
        table.tweets.push(tweet.clone());

        debug!(id = %tweet.id, user_id, "Tweet posted");
        Ok(tweet)
    }

    /// Remove the tweet with `id`, returning whether anything was removed.
    pub fn remove_tweet(&self, id: &str) -> bool {
        let mut table = self.write();
        let Some(pos) = table.tweets.iter().position(|t| t.id == id) else {
            return false;
        };
        table.tweets.remove(pos);

        debug!(id, "Tweet deleted");
        true
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::seeded()
    }
}
