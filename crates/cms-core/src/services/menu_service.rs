// ============================================================================
// CMS Core - Menu Service
// File: crates/cms-core/src/services/menu_service.rs
// ============================================================================
//! Menu CRUD with parent checks, cascade delete and tree views

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::menu_tree::{build_tree, MenuNode};
use crate::domain::{MenuDraft, MenuItem, Record};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

#[derive(Clone)]
pub struct MenuService {
    repo: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: &Uuid) -> Result<MenuItem, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(MenuItem::RESOURCE, id))
    }

    /// Full tree including inactive items, for the admin panel.
    pub async fn tree(&self) -> Result<Vec<MenuNode>, DomainError> {
        Ok(build_tree(&self.repo.list().await?))
    }

    /// Navigation for the public site. Inactive items are removed before
    /// the tree is built, which hides their descendants too.
    pub async fn public_tree(&self) -> Result<Vec<MenuNode>, DomainError> {
        let active: Vec<MenuItem> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|item| item.is_active)
            .collect();
        Ok(build_tree(&active))
    }

    pub async fn create(&self, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        draft.validate()?;
        if let Some(parent_id) = draft.parent_id {
            let items = self.repo.list().await?;
            if !items.iter().any(|item| item.id == parent_id) {
                return Err(DomainError::ValidationError(format!(
                    "Parent menu item does not exist: {}",
                    parent_id
                )));
            }
        }

        let item = self.repo.create(draft).await?;
        info!(id = %item.id, title = %item.title, "Menu item created");
        Ok(item)
    }

    pub async fn update(&self, id: &Uuid, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        draft.validate()?;
        if let Some(parent_id) = draft.parent_id {
            let items = self.repo.list().await?;
            ensure_acyclic_parent(&items, id, &parent_id)?;
        }

        let item = self.repo.update(id, draft).await?.ok_or_else(|| {
            warn!(%id, "Update of missing menu item");
            DomainError::not_found(MenuItem::RESOURCE, id)
        })?;
        info!(id = %item.id, "Menu item updated");
        Ok(item)
    }

    /// Removes the item and its direct children.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if self.repo.delete_with_children(id).await? {
            info!(%id, "Menu item deleted with its children");
            Ok(())
        } else {
            warn!(%id, "Delete of missing menu item");
            Err(DomainError::not_found(MenuItem::RESOURCE, id))
        }
    }
}

/// The new parent must exist and must not be the item itself or one of
/// its descendants.
fn ensure_acyclic_parent(
    items: &[MenuItem],
    id: &Uuid,
    parent_id: &Uuid,
) -> Result<(), DomainError> {
    let parents: HashMap<Uuid, Option<Uuid>> =
        items.iter().map(|item| (item.id, item.parent_id)).collect();

    if !parents.contains_key(parent_id) {
        return Err(DomainError::ValidationError(format!(
            "Parent menu item does not exist: {}",
            parent_id
        )));
    }

    let mut current = Some(*parent_id);
    let mut hops = 0;
    while let Some(node) = current {
        if node == *id || hops > parents.len() {
            return Err(DomainError::ValidationError(
                "Menu item cannot be placed under itself or its descendants".to_string(),
            ));
        }
        current = parents.get(&node).copied().flatten();
        hops += 1;
    }
    Ok(())
}
