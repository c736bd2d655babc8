use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::MovieSource;
use crate::config::UpstreamSettings;
use crate::error::{Result, TweetqlError};
use crate::model::{Movie, null_as_default};

const LIST_ENDPOINT: &str = "list_movies.json";
const DETAIL_ENDPOINT: &str = "movie_details.json";

/// `{ "data": { ... } }` wrapper the upstream puts around every payload.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ListData {
    // Omitted (or null) when the listing is empty.
    #[serde(default, deserialize_with = "null_as_default")]
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct DetailData {
    #[serde(default)]
    movie: Option<Movie>,
}

/// Production client for the movie-listing HTTP API.
///
/// One request per call: no retries, no caching, no timeout.
pub struct MovieClient {
    list_url: Url,
    detail_url: Url,
    client: ReqwestClient,
}

impl MovieClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let base = settings.url()?;
        let join = |endpoint: &str| {
            base.join(endpoint)
                .map_err(|e| TweetqlError::Config(format!("Invalid upstream endpoint: {}", e)))
        };

        // reqwest is built without a bundled crypto provider.
        let _ = rustls::crypto::ring::default_provider().install_default();

        Ok(Self {
            list_url: join(LIST_ENDPOINT)?,
            detail_url: join(DETAIL_ENDPOINT)?,
            client: ReqwestClient::builder().build()?,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "Fetching from upstream");
        let res = self.client.get(url).send().await?.error_for_status()?;
        let envelope: Envelope<T> = res.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl MovieSource for MovieClient {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let data: ListData = self.fetch(self.list_url.clone()).await?;
        Ok(data.movies)
    }

    async fn movie(&self, id: &str) -> Result<Option<Movie>> {
        let mut url = self.detail_url.clone();
        url.query_pairs_mut().append_pair("movie_id", id);
        let data: DetailData = self.fetch(url).await?;
        Ok(data.movie)
    }
}
