use serde::{Deserialize, Deserializer, Serialize};

/// A movie record exactly as the upstream API shapes it.
///
/// Every field defaults when absent or `null` so that sparse or placeholder
/// records (the upstream answers unknown ids with an all-zero record) still
/// decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub imdb_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_english: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_long: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub runtime: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description_full: String,
    pub synopsis: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub yt_trailer_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub background_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub background_image_original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub small_cover_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub medium_cover_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large_cover_image: String,
}

/// Deserialize an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_sparse_record() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 10, "title": "Inception", "genres": ["Sci-Fi"]}"#)
                .unwrap();
        assert_eq!(movie.id, 10);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genres, vec!["Sci-Fi".to_string()]);
        assert_eq!(movie.summary, None);
        assert_eq!(movie.year, 0);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 1, "torrents": [], "state": "ok"}"#).unwrap();
        assert_eq!(movie.id, 1);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 3, "title": null, "genres": null, "rating": null, "summary": null}"#,
        )
        .unwrap();
        assert_eq!(movie.id, 3);
        assert_eq!(movie.title, "");
        assert!(movie.genres.is_empty());
        assert_eq!(movie.rating, 0.0);
        assert_eq!(movie.summary, None);
    }
}
