use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweetqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User does not exist: {0}")]
    UnknownUser(String),

    #[error("No tweet ids left to allocate")]
    IdsExhausted,

    #[error("Upstream movie service unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TweetqlError {
    /// Stable machine-readable code, exposed as the GraphQL `code` extension.
    pub fn code(&self) -> &'static str {
        match self {
            TweetqlError::Config(_) => "CONFIG",
            TweetqlError::UnknownUser(_) => "UNKNOWN_USER",
            TweetqlError::IdsExhausted => "IDS_EXHAUSTED",
            TweetqlError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            TweetqlError::Io(_) | TweetqlError::Yaml(_) | TweetqlError::Json(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for TweetqlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code().to_string();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, TweetqlError>;
