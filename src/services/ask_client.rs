// src/services/ask_client.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::AskError,
    message::{AskRequest, AskResponse},
};

/// The single outbound call this app makes.
#[async_trait]
pub trait AskService: Send + Sync {
    async fn ask(&self, query: &str) -> Result<AskResponse, AskError>;
}

/// `AskService` backed by the HTTP inference endpoint.
#[derive(Debug, Clone)]
pub struct HttpAskClient {
    http: Client,
    endpoint: String,
}

impl HttpAskClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AskError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AskService for HttpAskClient {
    async fn ask(&self, query: &str) -> Result<AskResponse, AskError> {
        debug!(endpoint = %self.endpoint, "sending ask request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AskRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AskError::Status { status: status.as_u16(), body });
        }

        let parsed: AskResponse = serde_json::from_str(&body)?;
        if let Some(err) = &parsed.error {
            warn!(error = %err, "inference endpoint reported an error");
        }
        debug!(matches = parsed.matches.len(), "ask request succeeded");
        Ok(parsed)
    }
}
