//! Page repository trait (port)

use async_trait::async_trait;

use super::ContentStore;
use crate::domain::Page;
use crate::error::DomainError;

#[async_trait]
pub trait PageRepository: ContentStore<Page> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        Ok(self.list().await?.into_iter().find(|page| page.slug == slug))
    }
}
