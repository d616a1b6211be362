// ============================================================================
// CMS Infrastructure - Upstream Store
// File: crates/cms-infrastructure/src/upstream/store.rs
// Description: ContentStore proxied to the upstream backend over JSON/HTTP
// ============================================================================

use async_trait::async_trait;
use reqwest::Method;
use std::marker::PhantomData;

use cms_core::domain::Record;
use cms_core::error::DomainError;
use cms_core::repositories::ContentStore;

use super::UpstreamClient;

/// Proxies `E` to `{base_url}/{E::RESOURCE}[/{id}]`.
pub struct UpstreamStore<E: Record> {
    client: UpstreamClient,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record> UpstreamStore<E> {
    pub fn new(client: UpstreamClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn item_path(id: &E::Id) -> String {
        format!("{}/{}", E::RESOURCE, id)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, DomainError> {
    response.json::<T>().await.map_err(|e| DomainError::UpstreamError {
        status: None,
        message: format!("Invalid upstream payload: {}", e),
    })
}

#[async_trait]
impl<E: Record> ContentStore<E> for UpstreamStore<E> {
    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let request = self.client.request(Method::GET, E::RESOURCE);
        match self.client.send(request).await? {
            Some(response) => decode(response).await,
            None => Err(DomainError::UpstreamError {
                status: Some(404),
                message: format!("Upstream has no {} collection", E::RESOURCE),
            }),
        }
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, DomainError> {
        let request = self.client.request(Method::GET, &Self::item_path(id));
        match self.client.send(request).await? {
            Some(response) => decode(response).await.map(Some),
            None => Ok(None),
        }
    }

    async fn create(&self, draft: E::Draft) -> Result<E, DomainError> {
        let request = self.client.request(Method::POST, E::RESOURCE).json(&draft);
        match self.client.send(request).await? {
            Some(response) => decode(response).await,
            None => Err(DomainError::UpstreamError {
                status: Some(404),
                message: format!("Upstream has no {} collection", E::RESOURCE),
            }),
        }
    }

    async fn update(&self, id: &E::Id, draft: E::Draft) -> Result<Option<E>, DomainError> {
        let request = self
            .client
            .request(Method::PUT, &Self::item_path(id))
            .json(&draft);
        match self.client.send(request).await? {
            Some(response) => decode(response).await.map(Some),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &E::Id) -> Result<bool, DomainError> {
        let request = self.client.request(Method::DELETE, &Self::item_path(id));
        Ok(self.client.send(request).await?.is_some())
    }
}
