use crate::model::{Movie as ModelMovie, Tweet as ModelTweet, User as ModelUser};
use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use super::schema::app_state;

/// User object represents a resource for a User
#[derive(SimpleObject, Clone)]
pub struct User {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    /// Is the sum of firstname + lastname as a string
    pub full_name: String,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            full_name: u.full_name(),
            id: ID(u.id),
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

/// Tweet object represents a resource for a Tweet
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tweet {
    pub id: ID,
    pub text: String,
    #[graphql(skip)]
    pub user_id: String,
}

#[ComplexObject]
impl Tweet {
    /// The user who posted this tweet, or null if that user does not exist
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let state = app_state(ctx)?;
        Ok(state.repo.find_user(&self.user_id).map(Into::into))
    }
}

impl From<ModelTweet> for Tweet {
    fn from(t: ModelTweet) -> Self {
        Self {
            id: ID(t.id),
            text: t.text,
            user_id: t.user_id,
        }
    }
}

/// Movie record passed through from the upstream movie-listing API
#[derive(SimpleObject, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct Movie {
    pub id: i64,
    pub url: String,
    pub imdb_code: String,
    pub title: String,
    pub title_english: String,
    pub title_long: String,
    pub slug: String,
    pub year: i32,
    pub rating: f64,
    pub runtime: f64,
    pub genres: Vec<String>,
    pub summary: Option<String>,
    pub description_full: String,
    pub synopsis: Option<String>,
    pub yt_trailer_code: String,
    pub language: String,
    pub background_image: String,
    pub background_image_original: String,
    pub small_cover_image: String,
    pub medium_cover_image: String,
    pub large_cover_image: String,
}

impl From<ModelMovie> for Movie {
    fn from(m: ModelMovie) -> Self {
        Self {
            id: m.id,
            url: m.url,
            imdb_code: m.imdb_code,
            title: m.title,
            title_english: m.title_english,
            title_long: m.title_long,
            slug: m.slug,
            year: m.year,
            rating: m.rating,
            runtime: m.runtime,
            genres: m.genres,
            summary: m.summary,
            description_full: m.description_full,
            synopsis: m.synopsis,
            yt_trailer_code: m.yt_trailer_code,
            language: m.language,
            background_image: m.background_image,
            background_image_original: m.background_image_original,
            small_cover_image: m.small_cover_image,
            medium_cover_image: m.medium_cover_image,
            large_cover_image: m.large_cover_image,
        }
    }
}
