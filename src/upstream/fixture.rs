//! In-memory movie source for tests and offline runs.

use async_trait::async_trait;

use super::MovieSource;
use crate::error::Result;
use crate::model::Movie;

/// Movie source backed by a fixed list of records.
///
/// Unknown ids yield a default (zeroed) record, the same shape the live
/// upstream answers with.
#[derive(Debug, Clone, Default)]
pub struct StaticMovies {
    movies: Vec<Movie>,
}

impl StaticMovies {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl MovieSource for StaticMovies {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    async fn movie(&self, id: &str) -> Result<Option<Movie>> {
        Ok(Some(
            self.movies
                .iter()
                .find(|m| m.id.to_string() == id)
                .cloned()
                .unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            ..Movie::default()
        }
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let source = StaticMovies::new(vec![movie(1, "Inception"), movie(2, "Interstellar")]);
        assert_eq!(source.list_movies().await.unwrap().len(), 2);
        assert_eq!(source.movie("2").await.unwrap().unwrap().title, "Interstellar");
    }

    #[tokio::test]
    async fn test_unknown_id_is_placeholder() {
        let source = StaticMovies::default();
        assert_eq!(source.movie("42").await.unwrap(), Some(Movie::default()));
    }
}
