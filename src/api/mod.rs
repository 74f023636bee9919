//! Fetch adapter for the tracking backend.
//!
//! [`Fetcher`] issues exactly one GET per call and hands back the decoded JSON
//! body; the typed endpoint functions in the submodules narrow that to the
//! model type they expect. Transport failures, non-success statuses and
//! malformed bodies all come back as a [`FetchError`].

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod bills;
pub mod council;
pub mod persons;
pub mod users;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connection reset, and the like.
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    /// Body was not JSON, or not the shape the caller expected.
    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The fetch task ended without producing a result, e.g. it panicked or
    /// the runtime shut down. `path` holds the loader's label.
    #[error("load of {path} ended without a result")]
    Aborted { path: String },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            FetchError::Request { path, .. }
            | FetchError::Status { path, .. }
            | FetchError::Decode { path, .. }
            | FetchError::Aborted { path } => path,
        }
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `path` (relative to the backend root) and parse the body as JSON.
    async fn get(&self, path: &str) -> Result<Value, FetchError>;
}

/// Fetch `path` and check the body against `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    path: &str,
) -> Result<T, FetchError> {
    let value = fetcher.get(path).await?;
    serde_json::from_value(value).map_err(|source| {
        error!("Response from {} did not match the expected shape: {}", path, source);
        FetchError::Decode {
            path: path.to_string(),
            source,
        }
    })
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(|source| {
            error!("Request to {} failed: {}", url, source);
            FetchError::Request {
                path: path.to_string(),
                source,
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            error!("{} returned {}", url, status);
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.bytes().await.map_err(|source| FetchError::Request {
            path: path.to_string(),
            source,
        })?;
        let value = serde_json::from_slice(&body).map_err(|source| {
            error!("Malformed body from {}: {}", url, source);
            FetchError::Decode {
                path: path.to_string(),
                source,
            }
        })?;

        info!("Fetched {}", path);
        Ok(value)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::unwrap_used)]
pub mod mock {
    //! In-memory [`Fetcher`] for tests.

    use super::{FetchError, Fetcher};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Canned {
        Json(Value),
        Status(u16),
    }

    /// Serves canned responses per path and records every request.
    ///
    /// Paths without a canned response answer 404.
    #[derive(Default)]
    pub struct MockFetcher {
        responses: Mutex<HashMap<String, Canned>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond_json(self, path: &str, body: Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(path.to_string(), Canned::Json(body));
            self
        }

        pub fn respond_status(self, path: &str, status: u16) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(path.to_string(), Canned::Status(status));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn get(&self, path: &str) -> Result<Value, FetchError> {
            self.calls.lock().unwrap().push(path.to_string());

            match self.responses.lock().unwrap().get(path) {
                Some(Canned::Json(body)) => Ok(body.clone()),
                Some(Canned::Status(status)) => Err(FetchError::Status {
                    path: path.to_string(),
                    status: *status,
                    message: String::new(),
                }),
                None => Err(FetchError::Status {
                    path: path.to_string(),
                    status: 404,
                    message: "no canned response".to_string(),
                }),
            }
        }
    }
}
