use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::store::{Outcome, Slice};

pub const BASE_URL_ENV: &str = "SCHOOLHUB_API_URL";

/// Generic message surfaced for transport-level failures. Callers never see
/// the raw reqwest error text.
pub const NETWORK_ERROR: &str = "Network Error";

/// Thin wrapper over reqwest bound to the backend base URL. Every call
/// settles into an `Outcome`; nothing here returns a transport error to the
/// caller directly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        log::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await;
        self.settle(path, response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Outcome<T> {
        log::debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await;
        self.settle(path, response).await
    }

    async fn settle<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Outcome<T> {
        let response = match response {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{}: transport failure: {}", path, e);
                return Outcome::Transport(NETWORK_ERROR.to_string());
            }
        };
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                log::warn!("{}: failed reading body: {}", path, e);
                return Outcome::Transport(NETWORK_ERROR.to_string());
            }
        };
        let outcome = classify(status, &body);
        if let Outcome::Rejected(message) = &outcome {
            log::info!("{}: rejected: {}", path, message);
        }
        outcome
    }

    /// Fetch `path` and drive the slice through the full lifecycle:
    /// `begin()` before the call, `resolve()` after.
    pub async fn fetch_into<T: DeserializeOwned>(&self, path: &str, slice: &mut Slice<T>) {
        let token = slice.begin();
        let outcome = self.get(path).await;
        slice.resolve(token, outcome);
    }

    pub async fn post_into<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        slice: &mut Slice<T>,
    ) {
        let token = slice.begin();
        let outcome = self.post(path, body).await;
        slice.resolve(token, outcome);
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Map an HTTP response onto an outcome. Pure so the taxonomy is testable
/// without a socket:
/// - a 2xx body that parses as `T` is a success;
/// - any body carrying a `message` string is a business-rule rejection
///   (the backend reports these both on 2xx and on error statuses);
/// - a 2xx body that parses as neither is a malformed response;
/// - everything else is the generic network error.
pub fn classify<T: DeserializeOwned>(status: u16, body: &str) -> Outcome<T> {
    let success = (200..300).contains(&status);
    if success {
        if let Ok(value) = serde_json::from_str::<T>(body) {
            return Outcome::Success(value);
        }
    }
    if let Ok(m) = serde_json::from_str::<MessageBody>(body) {
        return Outcome::Rejected(m.message);
    }
    if success {
        return Outcome::Transport(format!("malformed response body (HTTP {})", status));
    }
    Outcome::Transport(NETWORK_ERROR.to_string())
}
