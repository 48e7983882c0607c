//! Backend API Client
//!
//! HTTP bindings to the DSList backend, organized by resource.

mod games;
mod lists;

use std::future::Future;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

/// Transport-level failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request timed out after {millis} ms")]
    Timeout { millis: u32 },
}

impl ApiError {
    /// HTTP 404 from the backend
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Client for the DSList backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    /// GET `path` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        web_sys::console::log_1(&format!("[API] GET {}", url).into());

        self.with_timeout(async {
            let response = self
                .http()
                .get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status { status: status.as_u16(), url: url.clone() });
            }
            response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }

    /// POST a JSON body to `path`; any 2xx counts as success
    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.url(path);
        web_sys::console::log_1(&format!("[API] POST {}", url).into());

        self.with_timeout(async {
            let response = self
                .http()
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status { status: status.as_u16(), url: url.clone() });
            }
            Ok(())
        })
        .await
    }

    /// Race `call` against the configured timeout.
    ///
    /// When the timer wins, the request future is dropped, which aborts the fetch.
    async fn with_timeout<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let millis = u32::try_from(self.config.request_timeout.as_millis()).unwrap_or(u32::MAX);
        let timer = TimeoutFuture::new(millis);

        match future::select(Box::pin(call), Box::pin(timer)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                web_sys::console::warn_1(&format!("[API] request timed out after {} ms", millis).into());
                Err(ApiError::Timeout { millis })
            }
        }
    }
}
