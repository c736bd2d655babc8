use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};
use tracing::debug;

use crate::error::TweetqlError;
use crate::storage::Repository;
use crate::upstream::MovieSource;

use super::types::*;

pub type TweetqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Everything resolvers need, handed to the schema once at startup.
pub struct AppState {
    pub repo: Arc<Repository>,
    pub movies: Arc<dyn MovieSource>,
}

pub fn build_schema(repo: Arc<Repository>, movies: Arc<dyn MovieSource>) -> TweetqlSchema {
    let state = Arc::new(AppState { repo, movies });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub(super) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all Tweets
    async fn all_tweets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Tweet>> {
        let state = app_state(ctx)?;
        Ok(state.repo.list_tweets().into_iter().map(Into::into).collect())
    }

    /// Get a Tweet using id
    async fn tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Tweet>> {
        let state = app_state(ctx)?;
        Ok(state.repo.find_tweet(&id).map(Into::into))
    }

    /// Get all Users
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let state = app_state(ctx)?;
        Ok(state.repo.list_users().into_iter().map(Into::into).collect())
    }

    /// Get all Movies from the upstream movie-listing service
    async fn all_movies(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Movie>> {
        let state = app_state(ctx)?;
        let movies = state.movies.list_movies().await.map_err(|e| e.extend())?;
        Ok(movies.into_iter().map(Into::into).collect())
    }

    /// Get a Movie using id
    async fn movie(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Movie>> {
        let state = app_state(ctx)?;
        let movie = state.movies.movie(&id).await.map_err(|e| e.extend())?;
        Ok(movie.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a Tweet
    async fn post_tweet(
        &self,
        ctx: &Context<'_>,
        text: String,
        user_id: ID,
    ) -> async_graphql::Result<Option<Tweet>> {
        let state = app_state(ctx)?;
        match state.repo.insert_tweet(&text, &user_id) {
            Ok(tweet) => Ok(Some(tweet.into())),
            Err(TweetqlError::UnknownUser(id)) => {
                debug!(user_id = %id, "postTweet rejected, returning null");
                Ok(None)
            }
            Err(e) => Err(e.extend()),
        }
    }

    /// Deletes a Tweet if found, else return false
    async fn delete_tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let state = app_state(ctx)?;
        Ok(state.repo.remove_tweet(&id))
    }
}
