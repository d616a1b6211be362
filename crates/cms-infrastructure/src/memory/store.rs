// ============================================================================
// CMS Infrastructure - In-memory Store
// File: crates/cms-infrastructure/src/memory/store.rs
// Description: Mock database kept in process memory, lost on restart
// ============================================================================

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use cms_core::domain::{MenuItem, Page, Record, RecordId};
use cms_core::error::DomainError;
use cms_core::repositories::{ContentStore, MenuRepository, PageRepository};

/// Insertion-ordered records behind a lock. The lock is never held across
/// an await point.
pub struct MemoryStore<E: Record> {
    records: RwLock<Vec<E>>,
}

impl<E: Record> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl<E: Record> ContentStore<E> for MemoryStore<E> {
    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.records.read().clone())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, DomainError> {
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn create(&self, draft: E::Draft) -> Result<E, DomainError> {
        let mut records = self.records.write();
        let ids: Vec<E::Id> = records.iter().map(|record| record.id().clone()).collect();
        let record = E::from_draft(E::Id::next(&ids), draft);
        records.push(record.clone());
        debug!(resource = E::RESOURCE, id = %record.id(), "Stored in memory");
        Ok(record)
    }

    async fn update(&self, id: &E::Id, draft: E::Draft) -> Result<Option<E>, DomainError> {
        let mut records = self.records.write();
        Ok(records.iter_mut().find(|record| record.id() == id).map(|record| {
            record.apply_draft(draft);
            record.clone()
        }))
    }

    async fn delete(&self, id: &E::Id) -> Result<bool, DomainError> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.id() != id);
        Ok(records.len() < before)
    }
}

#[async_trait]
impl PageRepository for MemoryStore<Page> {}

#[async_trait]
impl MenuRepository for MemoryStore<MenuItem> {}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::domain::{Branch, BranchDraft, MenuDraft};
    use uuid::Uuid;

    fn menu(title: &str, parent_id: Option<Uuid>) -> MenuDraft {
        MenuDraft {
            title: title.to_string(),
            href: format!("/{}", title),
            order: 0,
            is_active: true,
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let store = MemoryStore::<MenuItem>::new();

        let created = store.create(menu("loans", None)).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), Some(created.clone()));

        let updated = store
            .update(&created.id, menu("savings", None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "savings");

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_update_is_none() {
        let store = MemoryStore::<MenuItem>::new();
        let result = store.update(&Uuid::new_v4(), menu("x", None)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_integer_ids_increment() {
        let store = MemoryStore::<Branch>::new();
        let draft = BranchDraft {
            branch_name: "Central".to_string(),
            address: "Peace Ave 1".to_string(),
            work_days: "Mon-Fri".to_string(),
            work_hours: "09:00-18:00".to_string(),
            latitude: 47.91,
            longitude: 106.91,
            phone_numbers: vec!["7000-0000".to_string()],
            province_name: "Ulaanbaatar".to_string(),
            district_name: "Sukhbaatar".to_string(),
            region_name: "Central".to_string(),
        };

        let first = store.create(draft.clone()).await.unwrap();
        let second = store.create(draft).await.unwrap();
        assert_eq!(first.branch_id, 1);
        assert_eq!(second.branch_id, 2);
    }

    #[tokio::test]
    async fn test_cascade_removes_direct_children_only() {
        let store = MemoryStore::<MenuItem>::new();
        let parent = store.create(menu("products", None)).await.unwrap();
        let child = store.create(menu("loans", Some(parent.id))).await.unwrap();
        let grandchild = store.create(menu("car-loan", Some(child.id))).await.unwrap();
        let other = store.create(menu("about", None)).await.unwrap();

        assert!(store.delete_with_children(&parent.id).await.unwrap());

        let remaining = store.list().await.unwrap();
        assert!(remaining.iter().all(|item| item.parent_id != Some(parent.id)));
        assert!(remaining.iter().any(|item| item.id == other.id));
        // one level only; the grandchild is left dangling
        assert!(remaining.iter().any(|item| item.id == grandchild.id));
        assert!(!store.delete_with_children(&parent.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_slug_default() {
        let store = MemoryStore::<Page>::new();
        let draft = serde_json::from_value(serde_json::json!({
            "slug": "about-us",
            "title_mn": "Бидний тухай",
            "title_en": "About Us",
            "content_mn": "x",
            "content_en": "y"
        }))
        .unwrap();
        let page = store.create(draft).await.unwrap();

        assert_eq!(store.find_by_slug("about-us").await.unwrap().unwrap().id, page.id);
        assert!(store.find_by_slug("contact").await.unwrap().is_none());
    }
}
