//! # HTTP Resource Client
//!
//! Talks to the hosted REST collection:
//!
//! | Operation | Request        |
//! |-----------|----------------|
//! | list      | `GET B`        |
//! | get       | `GET B/{id}`   |
//! | create    | `POST B`       |
//! | update    | `PUT B/{id}`   |
//! | delete    | `DELETE B/{id}`|
//!
//! where `B` is the collection base URL. Bodies are JSON both ways.
use crate::clients::{ResourceRepository, TransportError};
use crate::model::{Resource, ResourceDraft, ResourceId};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// The hosted collection used when no URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://66e4eef15cc7f9b6273bde21.mockapi.io/api/recursos";

#[derive(Clone)]
pub struct HttpResourceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Uses a preconfigured `reqwest::Client` (proxies, TLS roots, ...).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &ResourceId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fails on non-2xx, otherwise returns the raw body.
    async fn read_body(resp: reqwest::Response) -> Result<String, TransportError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.text().await?)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TransportError> {
        let body = Self::read_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ResourceRepository for HttpResourceClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Resource>, TransportError> {
        debug!(url = %self.base_url, "Sending request");
        let resp = self.client.get(&self.base_url).send().await?;
        let resources: Vec<Resource> = Self::decode(resp).await?;
        debug!(count = resources.len(), "Listed");
        Ok(resources)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &ResourceId) -> Result<Resource, TransportError> {
        debug!("Sending request");
        let resp = self.client.get(self.item_url(id)).send().await?;
        Self::decode(resp).await
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &ResourceDraft) -> Result<Resource, TransportError> {
        debug!("Sending request");
        let resp = self.client.post(&self.base_url).json(draft).send().await?;
        let created: Resource = Self::decode(resp).await?;
        info!(id = %created.id, "Created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: &ResourceId,
        draft: &ResourceDraft,
    ) -> Result<Resource, TransportError> {
        debug!("Sending request");
        let resp = self.client.put(self.item_url(id)).json(draft).send().await?;
        let updated: Resource = Self::decode(resp).await?;
        info!(%id, "Updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &ResourceId) -> Result<(), TransportError> {
        debug!("Sending request");
        let resp = self.client.delete(self.item_url(id)).send().await?;
        // The collection echoes the removed record; nothing to decode.
        Self::read_body(resp).await?;
        info!(%id, "Deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpResourceClient::new("http://localhost:9/api/recursos/");
        assert_eq!(client.base_url(), "http://localhost:9/api/recursos");
        assert_eq!(
            client.item_url(&ResourceId::from("3")),
            "http://localhost:9/api/recursos/3"
        );
    }
}
