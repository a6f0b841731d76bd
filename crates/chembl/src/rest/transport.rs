//! Raw payload retrieval.

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;

use crate::error::{ChemblError, Result};

use super::client::ClientConfig;

/// Fetches raw payloads by resource path (e.g. `compounds/CHEMBL1`).
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Transport: Send + Sync {
    /// Fetch the payload at `path`, or `None` if the resource does not exist.
    fn get(&self, path: &str) -> Result<Option<String>>;
}

/// Blocking HTTP transport for the ChEMBL web services.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ChemblError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<Option<String>> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/xml"))
            .send()
            .map_err(|e| ChemblError::Request(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("GET {} -> 404", url);
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(ChemblError::Request(format!(
                "GET {} returned {}: {}",
                url, status, error_text
            )));
        }

        response
            .text()
            .map(Some)
            .map_err(|e| ChemblError::Request(format!("Failed to read response from {}: {}", url, e)))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/chemblws/")
            .with_timeout(Duration::from_secs(5));
        let transport = HttpTransport::with_config(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080/chemblws");
        assert_eq!(
            transport.url("/compounds/CHEMBL1"),
            "http://localhost:8080/chemblws/compounds/CHEMBL1"
        );
        assert_eq!(
            transport.url("targets/CHEMBL240/bioactivities"),
            "http://localhost:8080/chemblws/targets/CHEMBL240/bioactivities"
        );
    }
}
