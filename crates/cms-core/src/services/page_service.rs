// ============================================================================
// CMS Core - Page Service
// File: crates/cms-core/src/services/page_service.rs
// ============================================================================
//! CMS pages: CRUD with slug uniqueness and published lookup

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Page, PageDraft, Record};
use crate::error::DomainError;
use crate::repositories::PageRepository;

#[derive(Clone)]
pub struct PageService {
    repo: Arc<dyn PageRepository>,
}

impl PageService {
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Page>, DomainError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: &Uuid) -> Result<Page, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Page::RESOURCE, id))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Page, DomainError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found(Page::RESOURCE, slug))
    }

    /// Public lookup; drafts are reported as missing.
    pub async fn get_published(&self, slug: &str) -> Result<Page, DomainError> {
        match self.repo.find_by_slug(slug).await? {
            Some(page) if page.is_published => Ok(page),
            _ => Err(DomainError::not_found(Page::RESOURCE, slug)),
        }
    }

    pub async fn create(&self, draft: PageDraft) -> Result<Page, DomainError> {
        draft.validate()?;

        if self.repo.find_by_slug(&draft.slug).await?.is_some() {
            warn!("Page slug already exists: {}", draft.slug);
            return Err(DomainError::Conflict(format!(
                "Page slug already exists: {}",
                draft.slug
            )));
        }

        let page = self.repo.create(draft).await?;
        info!(id = %page.id, slug = %page.slug, "Page created");
        Ok(page)
    }

    pub async fn update(&self, id: &Uuid, draft: PageDraft) -> Result<Page, DomainError> {
        draft.validate()?;

        if let Some(existing) = self.repo.find_by_slug(&draft.slug).await? {
            if existing.id != *id {
                warn!("Page slug already taken by {}: {}", existing.id, draft.slug);
                return Err(DomainError::Conflict(format!(
                    "Page slug already exists: {}",
                    draft.slug
                )));
            }
        }

        let page = self
            .repo
            .update(id, draft)
            .await?
            .ok_or_else(|| DomainError::not_found(Page::RESOURCE, id))?;
        info!(id = %page.id, slug = %page.slug, "Page updated");
        Ok(page)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            info!(%id, "Page deleted");
            Ok(())
        } else {
            Err(DomainError::not_found(Page::RESOURCE, id))
        }
    }
}
