//! Remote vocabulary fetching.
//!
//! A fetch tries the URL directly, then once more through the fallback
//! proxy (`<proxy>?url=<target>`). There is no timeout and no further retry.

use reqwest::{Client, Url};
use tracing::{info, warn};

/// Fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),

    #[error("Could not fetch {url} ({direct}); fallback also failed ({fallback})")]
    Unavailable {
        url: String,
        direct: Box<FetchError>,
        fallback: Box<FetchError>,
    },
}

/// Text fetcher with a single proxy fallback.
#[derive(Clone)]
pub struct RemoteLoader {
    client: Client,
    fallback_proxy: String,
}

impl RemoteLoader {
    pub fn new(fallback_proxy: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            fallback_proxy: fallback_proxy.into(),
        }
    }

    /// Fetch `url` as text, falling back to the proxy once.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let direct = match self.get_text(url).await {
            Ok(text) => {
                info!(url, bytes = text.len(), "fetched vocabulary");
                return Ok(text);
            }
            Err(e) => e,
        };

        warn!(url, error = %direct, "direct fetch failed, trying fallback proxy");

        let fallback = match self.proxy_url(url) {
            Ok(proxied) => match self.get_text(proxied.as_str()).await {
                Ok(text) => {
                    info!(url, bytes = text.len(), "fetched vocabulary through proxy");
                    return Ok(text);
                }
                Err(e) => e,
            },
            Err(e) => e,
        };

        Err(FetchError::Unavailable {
            url: url.to_string(),
            direct: Box::new(direct),
            fallback: Box::new(fallback),
        })
    }

    /// Proxy address for `target`.
    pub fn proxy_url(&self, target: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.fallback_proxy, &[("url", target)])
            .map_err(|e| FetchError::InvalidProxy(format!("{}: {}", self.fallback_proxy, e)))
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, message });
        }

        resp.text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_encodes_target() {
        let loader = RemoteLoader::new("https://proxy.example/raw");
        let url = loader
            .proxy_url("https://host.example/words.txt?lang=es&v=2")
            .unwrap();
        assert_eq!(url.host_str(), Some("proxy.example"));
        assert_eq!(url.path(), "/raw");
        let target: Vec<_> = url.query_pairs().collect();
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].0, "url");
        assert_eq!(target[0].1, "https://host.example/words.txt?lang=es&v=2");
    }

    #[test]
    fn invalid_proxy_is_reported() {
        let loader = RemoteLoader::new("not a url");
        assert!(matches!(
            loader.proxy_url("https://host.example/a.txt"),
            Err(FetchError::InvalidProxy(_))
        ));
    }

    #[test]
    fn unavailable_message_names_both_causes() {
        let err = FetchError::Unavailable {
            url: "https://host.example/a.txt".to_string(),
            direct: Box::new(FetchError::Status {
                status: 404,
                message: String::new(),
            }),
            fallback: Box::new(FetchError::Network("connection refused".to_string())),
        };
        let text = err.to_string();
        assert!(text.contains("https://host.example/a.txt"));
        assert!(text.contains("404"));
        assert!(text.contains("connection refused"));
    }
}
