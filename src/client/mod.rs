//! Typed HTTP client for the counter API.

mod error;

pub use error::ClientError;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::store::{Counter, CounterId};

#[derive(Clone)]
pub struct CounterClient {
    http: Client,
    base_url: String,
}

impl CounterClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/counters`
    pub async fn list_counters(&self) -> Result<Vec<Counter>, ClientError> {
        let url = format!("{}/api/counters", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|e| transport(&url, e))?;
        decode(&url, response).await
    }

    /// `POST /api/counters/{id}/inc?value={delta}`
    pub async fn increment(&self, id: CounterId, delta: i64) -> Result<Counter, ClientError> {
        let url = format!("{}/api/counters/{}/inc?value={}", self.base_url, id, delta);
        let response = self.http.post(&url).send().await.map_err(|e| transport(&url, e))?;
        decode(&url, response).await
    }
}

fn transport(url: &str, err: reqwest::Error) -> ClientError {
    tracing::warn!(%url, error = %err, "Request failed");
    if err.is_timeout() {
        ClientError::Timeout {
            url: url.to_string(),
        }
    } else {
        ClientError::Connect {
            url: url.to_string(),
            source: err,
        }
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
        tracing::warn!(%url, status = status.as_u16(), %message, "Server rejected request");
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
            }
        } else {
            ClientError::Decode {
                url: url.to_string(),
                source: e,
            }
        }
    })
}

/// Pull `error.message` out of the server's JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
