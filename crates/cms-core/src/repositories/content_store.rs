//! Generic storage port (one per resource)

use async_trait::async_trait;

use crate::domain::Record;
use crate::error::DomainError;

/// CRUD over one resource. Implementations may be a process-local store,
/// a relational database, an upstream HTTP service, or a test double.
///
/// Absence is reported as `Ok(None)` / `Ok(false)`; turning it into
/// `DomainError::NotFound` is the caller's decision.
#[async_trait]
pub trait ContentStore<E: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, DomainError>;
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, DomainError>;
    async fn create(&self, draft: E::Draft) -> Result<E, DomainError>;
    async fn update(&self, id: &E::Id, draft: E::Draft) -> Result<Option<E>, DomainError>;
    async fn delete(&self, id: &E::Id) -> Result<bool, DomainError>;
}
