//! Repositories backed by the flashcard REST backend.
//!
//! Every path is resolved against the configured base URL, e.g.
//! `http://127.0.0.1:8000/api/` + `decks/4/`.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::repository::{CardRepository, DeckRepository, Storage, StorageError};

mod card_repo;
mod deck_repo;
mod wire;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";

/// Environment variable consulted by [`RemoteConfig::from_env`].
pub const API_URL_ENV: &str = "FLASHDECK_API_URL";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: Url,
}

impl RemoteConfig {
    /// Parse a base URL. A trailing slash is added so relative paths resolve under it.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the URL does not parse or is not http(s).
    pub fn new(raw: &str) -> Result<Self, HttpInitError> {
        let mut base_url = Url::parse(raw.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(HttpInitError::UnsupportedScheme(base_url.scheme().to_owned()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read the base URL from `FLASHDECK_API_URL`, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the configured value is not a usable URL.
    pub fn from_env() -> Result<Self, HttpInitError> {
        match std::env::var(API_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError::Client` if the HTTP client cannot be constructed.
    pub fn new(config: &RemoteConfig) -> Result<Self, HttpInitError> {
        let client = Client::builder()
            .user_agent(concat!("flashdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.base_url
            .join(path)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StorageError> {
        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            Ok(response)
        } else {
            Err(status_error(status))
        }
    }
}

fn status_error(status: StatusCode) -> StorageError {
    match status {
        StatusCode::NOT_FOUND => StorageError::NotFound,
        StatusCode::CONFLICT => StorageError::Conflict,
        other => StorageError::Rejected {
            status: other.as_u16(),
        },
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    response
        .json::<T>()
        .await
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

impl Storage {
    /// Build a `Storage` that talks to the REST backend.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the HTTP client cannot be built.
    pub fn http(config: &RemoteConfig) -> Result<Self, HttpInitError> {
        let repo = HttpRepository::new(config)?;
        let decks: Arc<dyn DeckRepository> = Arc::new(repo.clone());
        let cards: Arc<dyn CardRepository> = Arc::new(repo);
        Ok(Self { decks, cards })
    }
}
