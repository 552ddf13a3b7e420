use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::contract::{User, UsersEnvelope};
use crate::domain::error::DomainError;
use crate::domain::ports::UserSource;
use crate::infra::traced_client::TracedClient;

/// Fetches the users document with a single GET.
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: TracedClient,
    url: Url,
}

impl HttpUserSource {
    pub fn new(client: TracedClient, url: Url) -> Self {
        Self { client, url }
    }

    /// Parse `url` and build a client honoring `timeout`.
    pub fn from_url(url: &str, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let parsed =
            Url::parse(url).map_err(|e| DomainError::invalid_source_url(url, e.to_string()))?;
        let client = TracedClient::with_timeout(timeout)
            .map_err(|e| DomainError::transport(e.to_string()))?;
        Ok(Self::new(client, parsed))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    #[instrument(
        name = "user_directory.http.fetch_users",
        skip_all,
        fields(url = %self.url)
    )]
    async fn fetch_users(&self) -> Result<Vec<User>, DomainError> {
        let response = self
            .client
            .get(self.url.as_str())
            .await
            .with_context(|| format!("GET {}", self.url))
            .map_err(|e| DomainError::transport(format!("{e:#}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::http_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let envelope: UsersEnvelope =
            serde_json::from_slice(&body).map_err(|e| DomainError::decode(e.to_string()))?;

        debug!(count = envelope.results.len(), "Decoded users document");
        Ok(envelope.results)
    }
}
