// ============================================================================
// CMS Infrastructure - PostgreSQL Menu Repository
// File: crates/cms-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use cms_core::domain::{MenuDraft, MenuItem};
use cms_core::error::DomainError;
use cms_core::repositories::{ContentStore, MenuRepository};

use super::map_db_error;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub title: String,
    pub href: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            title: row.title,
            href: row.href,
            order: row.sort_order,
            is_active: row.is_active,
            parent_id: row.parent_id,
        }
    }
}

#[async_trait]
impl ContentStore<MenuItem> for PgMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        // Insertion order keeps sibling ties stable in the tree builder
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, title, href, sort_order, is_active, parent_id
            FROM menu_items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing menu items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, title, href, sort_order, is_active, parent_id
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu item", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", draft.title);

        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menu_items (id, title, href, sort_order, is_active, parent_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, href, sort_order, is_active, parent_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(draft.title.trim())
        .bind(draft.href.trim())
        .bind(draft.order)
        .bind(draft.is_active)
        .bind(draft.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating menu item", e))?;

        Ok(row.into())
    }

    async fn update(&self, id: &Uuid, draft: MenuDraft) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            UPDATE menu_items
            SET
                title = $2,
                href = $3,
                sort_order = $4,
                is_active = $5,
                parent_id = $6
            WHERE id = $1
            RETURNING id, title, href, sort_order, is_active, parent_id
            "#,
        )
        .bind(id)
        .bind(draft.title.trim())
        .bind(draft.href.trim())
        .bind(draft.order)
        .bind(draft.is_active)
        .bind(draft.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating menu item", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting menu item", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, title, href, sort_order, is_active, parent_id
            FROM menu_items
            WHERE parent_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu children", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_with_children(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("starting menu delete", e))?;

        let removed = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("deleting menu item", e))?
            .rows_affected();

        if removed == 0 {
            tx.rollback()
                .await
                .map_err(|e| map_db_error("rolling back menu delete", e))?;
            return Ok(false);
        }

        let children = sqlx::query("DELETE FROM menu_items WHERE parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("deleting menu children", e))?
            .rows_affected();

        tx.commit()
            .await
            .map_err(|e| map_db_error("committing menu delete", e))?;

        info!("Deleted menu item {} and {} children", id, children);
        Ok(true)
    }
}
