// ============================================================================
// CMS Core - Content Service
// File: crates/cms-core/src/services/content_service.rs
// ============================================================================
//! CRUD gateway for one resource, independent of where it is stored

use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::Record;
use crate::error::DomainError;
use crate::repositories::ContentStore;

pub struct ContentService<E: Record> {
    store: Arc<dyn ContentStore<E>>,
}

impl<E: Record> Clone for ContentService<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<E: Record> ContentService<E> {
    pub fn new(store: Arc<dyn ContentStore<E>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<E>, DomainError> {
        self.store.list().await
    }

    pub async fn get(&self, id: &E::Id) -> Result<E, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::RESOURCE, id))
    }

    pub async fn create(&self, draft: E::Draft) -> Result<E, DomainError> {
        draft.validate()?;
        let record = self.store.create(draft).await?;
        info!(resource = E::RESOURCE, id = %record.id(), "Record created");
        Ok(record)
    }

    pub async fn update(&self, id: &E::Id, draft: E::Draft) -> Result<E, DomainError> {
        draft.validate()?;
        match self.store.update(id, draft).await? {
            Some(record) => {
                info!(resource = E::RESOURCE, %id, "Record updated");
                Ok(record)
            }
            None => {
                warn!(resource = E::RESOURCE, %id, "Update of missing record");
                Err(DomainError::not_found(E::RESOURCE, id))
            }
        }
    }

    pub async fn delete(&self, id: &E::Id) -> Result<(), DomainError> {
        if self.store.delete(id).await? {
            info!(resource = E::RESOURCE, %id, "Record deleted");
            Ok(())
        } else {
            warn!(resource = E::RESOURCE, %id, "Delete of missing record");
            Err(DomainError::not_found(E::RESOURCE, id))
        }
    }
}
