use crate::error::{Result, TweetqlError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use url::Url;

pub const CONFIG_FILE_NAME: &str = ".tweetql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| TweetqlError::Config(format!("Invalid listen address: {}", e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Base of the movie-listing API; endpoint file names are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://yts.mx/api/v2/".to_string()
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl UpstreamSettings {
    pub fn url(&self) -> Result<Url> {
        // Without a trailing slash `join` would replace the last segment.
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        Url::parse(&raw)
            .map_err(|e| TweetqlError::Config(format!("Invalid upstream base URL: {}", e)))
    }
}

impl TweetqlConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: TweetqlConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the nearest config file above `start_path`, or fall back to defaults.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TweetqlConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.upstream.url().unwrap().as_str(),
            "https://yts.mx/api/v2/"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: TweetqlConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.base_url, "https://yts.mx/api/v2/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let settings = UpstreamSettings {
            base_url: "http://localhost:9000/api".to_string(),
        };
        let url = settings.url().unwrap();
        assert_eq!(
            url.join("list_movies.json").unwrap().as_str(),
            "http://localhost:9000/api/list_movies.json"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let settings = UpstreamSettings {
            base_url: "not a url".to_string(),
        };
        assert!(matches!(settings.url(), Err(TweetqlError::Config(_))));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = TweetqlConfig::default();
        config.server.port = 5555;
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let loaded = TweetqlConfig::discover(&nested).unwrap();
        assert_eq!(loaded.server.port, 5555);
    }

    #[test]
    fn test_socket_addr() {
        let addr = ServerSettings::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 4000);

        let bad = ServerSettings {
            host: "not-an-ip".to_string(),
            port: 1,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_socket_addr_ipv6() {
        let settings = ServerSettings {
            host: "::1".to_string(),
            port: 4000,
        };
        let addr = settings.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::1]:4000");
    }
}
