//! Data sources: one retrieval of the JSON tree, no retry, no cache.
//!
//! Backends implement [`DataSource`]; [`open_source`] picks one from the URL
//! scheme so callers never name a backend directly.

use crate::data::parse_tree;
use crate::{Error, Result, SourceConfig, TreeNode};
use log::debug;
use std::path::PathBuf;

#[cfg(feature = "http")]
use reqwest::blocking::Client;
#[cfg(feature = "http")]
use std::time::Duration;

/// Core trait for dataset backends
pub trait DataSource {
    /// Retrieve and parse the document at `url`.
    ///
    /// Either the whole tree is returned or an error; partial data is never
    /// exposed.
    fn load(&self, url: &str) -> Result<TreeNode>;
}

/// Create the backend matching the scheme of `url`.
///
/// `http://` and `https://` use [`HttpSource`]; anything else is treated as a
/// local path (optionally `file://`-prefixed).
pub fn open_source(url: &str, config: &SourceConfig) -> Result<Box<dyn DataSource + Send>> {
    if is_remote(url) {
        #[cfg(feature = "http")]
        {
            return Ok(Box::new(HttpSource::new(config.clone())?));
        }
        #[cfg(not(feature = "http"))]
        {
            let _ = config;
            return Err(Error::ConfigError(format!(
                "{} requires the `http` feature",
                url
            )));
        }
    }
    Ok(Box::new(FileSource))
}

fn is_remote(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Blocking HTTP backend.
#[cfg(feature = "http")]
pub struct HttpSource {
    client: Client,
    config: SourceConfig,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[cfg(feature = "http")]
impl DataSource for HttpSource {
    fn load(&self, url: &str) -> Result<TreeNode> {
        let parsed = url::Url::parse(url)
            .map_err(|e| Error::ConfigError(format!("Invalid URL {}: {}", url, e)))?;

        debug!("fetching dataset from {}", parsed);
        let mut request = self.client.get(parsed);
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let resp = request
            .send()
            .map_err(|e| Error::NetworkError(format!("Failed to fetch {}: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::NetworkError(format!("{} returned HTTP {}", url, status)));
        }

        let body = resp
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e)))?;
        debug!("received {} bytes from {}", body.len(), url);

        parse_tree(&body)
    }
}

/// Local file backend (`/path/data.json` or `file:///path/data.json`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    fn path_of(url: &str) -> PathBuf {
        PathBuf::from(url.strip_prefix("file://").unwrap_or(url))
    }
}

impl DataSource for FileSource {
    fn load(&self, url: &str) -> Result<TreeNode> {
        let path = Self::path_of(url);
        debug!("reading dataset from {}", path.display());
        let body = std::fs::read_to_string(&path)?;
        parse_tree(&body)
    }
}
