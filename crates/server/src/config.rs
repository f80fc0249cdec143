use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tmdb_client::TmdbConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Poster image base URL (includes the size segment)
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Language requested from TMDB
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Per-request timeout for TMDB calls, in seconds
    #[serde(default = "default_tmdb_timeout_secs")]
    pub tmdb_timeout_secs: u64,

    /// Maximum number of movie details kept in memory
    #[serde(default = "default_enrichment_cache_size")]
    pub enrichment_cache_size: usize,

    /// Directory holding movie_list.dat and similarity.dat
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

fn default_tmdb_timeout_secs() -> u64 {
    10
}

fn default_enrichment_cache_size() -> usize {
    1024
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("model")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Settings for the TMDB HTTP client
    pub fn tmdb(&self) -> TmdbConfig {
        TmdbConfig::new(self.tmdb_api_key.clone())
            .with_api_url(self.tmdb_api_url.clone())
            .with_language(self.tmdb_language.clone())
            .with_timeout(Duration::from_secs(self.tmdb_timeout_secs))
    }

    /// Cache capacity; a configured zero falls back to one entry
    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.enrichment_cache_size).unwrap_or(NonZeroUsize::MIN)
    }

    /// Socket address string for the web server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
