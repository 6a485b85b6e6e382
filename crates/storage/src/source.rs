use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Fatal errors raised while loading the question document.
///
/// Any of these ends the session before interaction starts; nothing retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source {location} is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("question source {location} answered with status {status}")]
    HttpStatus { location: String, status: u16 },

    #[error("question source {location} is malformed: {reason}")]
    Malformed { location: String, reason: String },
}

/// Where the question document comes from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable location used in logs and errors.
    fn describe(&self) -> String;

    /// Fetch the raw document bytes.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Unreachable` or `LoadError::HttpStatus` when the document
    /// cannot be retrieved.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

pub type SourceRef = Arc<dyn QuestionSource>;

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Unreachable {
                location: self.describe(),
                reason: e.to_string(),
            })
    }
}

/// Fetches the document with a plain HTTP GET.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let unreachable = |e: reqwest::Error| LoadError::Unreachable {
            location: self.describe(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(unreachable)?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus {
                location: self.describe(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(unreachable)?;
        Ok(body.to_vec())
    }
}

/// Serves a fixed document, or a fixed failure, from memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    outcome: Result<Vec<u8>, String>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(document: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "memory".to_string(),
            outcome: Ok(document.into()),
        }
    }

    /// A source whose fetch always fails as if the network were down.
    #[must_use]
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            name: "memory".to_string(),
            outcome: Err(reason.into()),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        self.outcome.clone().map_err(|reason| LoadError::Unreachable {
            location: self.describe(),
            reason,
        })
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
#[must_use]
pub fn source_from_location(location: &str) -> SourceRef {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Arc::new(HttpSource::new(trimmed))
    } else {
        Arc::new(FileSource::new(trimmed))
    }
}
