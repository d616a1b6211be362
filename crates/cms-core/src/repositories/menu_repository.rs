//! Menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use super::ContentStore;
use crate::domain::MenuItem;
use crate::error::DomainError;

#[async_trait]
pub trait MenuRepository: ContentStore<MenuItem> {
    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|item| item.parent_id.as_ref() == Some(parent_id))
            .collect())
    }

    /// Deletes the item and its direct children. Returns `false` when the
    /// item does not exist, in which case nothing is removed.
    async fn delete_with_children(&self, id: &Uuid) -> Result<bool, DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        for child in self.find_children(id).await? {
            self.delete(&child.id).await?;
        }
        self.delete(id).await
    }
}
