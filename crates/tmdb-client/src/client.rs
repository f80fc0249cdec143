//! HTTP client for the TMDB v3 movie details endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, error, info};

use data_loader::MovieId;

use crate::{EnrichmentError, MetadataLookup, MovieDetails};

/// Connection settings for [`TmdbClient`]
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API root, e.g. `https://api.themoviedb.org/3`
    pub api_url: String,
    pub api_key: String,
    /// Value of the `language` query parameter
    pub language: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: "https://api.themoviedb.org/3".to_string(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the TMDB movie details API.
///
/// Wraps one pooled `reqwest::Client`; clones share the pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: HttpClient,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: TmdbConfig) -> Result<Self, EnrichmentError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(EnrichmentError::ClientBuild)?;

        info!(
            api_url = %config.api_url,
            timeout = ?config.timeout,
            "Created TMDB client"
        );
        Ok(Self { http, config })
    }

    /// Address of the API this client talks to.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    fn details_url(&self, movie_id: MovieId) -> String {
        format!(
            "{}/movie/{}",
            self.config.api_url.trim_end_matches('/'),
            movie_id
        )
    }
}

#[async_trait]
impl MetadataLookup for TmdbClient {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, EnrichmentError> {
        debug!(movie_id, "Fetching movie details");

        // The key goes in the query string; never log the full URL
        let response = self
            .http
            .get(self.details_url(movie_id))
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(movie_id, error = %e, "TMDB request failed");
                EnrichmentError::Request { movie_id, source: e }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(movie_id, status = status.as_u16(), "TMDB returned an error status");
            return Err(EnrichmentError::UnexpectedStatus {
                movie_id,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<MovieDetails>()
            .await
            .map_err(|e| EnrichmentError::Request {
                movie_id,
                source: e.without_url(),
            })
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TmdbConfig::new("key");
        assert_eq!(config.api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_details_url_tolerates_trailing_slash() {
        let client =
            TmdbClient::new(TmdbConfig::new("key").with_api_url("http://localhost:9000/3/")).unwrap();
        assert_eq!(client.details_url(603), "http://localhost:9000/3/movie/603");
        assert_eq!(client.api_url(), "http://localhost:9000/3/");
    }
}
