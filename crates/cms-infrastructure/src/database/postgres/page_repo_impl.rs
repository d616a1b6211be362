// ============================================================================
// CMS Infrastructure - PostgreSQL Page Repository
// File: crates/cms-infrastructure/src/database/postgres/page_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use cms_core::domain::{Page, PageDraft, PageLayout, Record};
use cms_core::error::DomainError;
use cms_core::repositories::{ContentStore, PageRepository};

use super::map_db_error;

const PAGE_COLUMNS: &str = r#"
    id, slug, title_mn, title_en, content_mn, content_en, is_published,
    banner_image, text_color, background_color, layout,
    created_at, updated_at
"#;

pub struct PgPageRepository {
    pool: PgPool,
}

impl PgPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PageRow {
    pub id: Uuid,
    pub slug: String,
    pub title_mn: String,
    pub title_en: String,
    pub content_mn: String,
    pub content_en: String,
    pub is_published: bool,
    pub banner_image: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub layout: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PageRow> for Page {
    fn from(row: PageRow) -> Self {
        Page {
            id: row.id,
            slug: row.slug,
            title_mn: row.title_mn,
            title_en: row.title_en,
            content_mn: row.content_mn,
            content_en: row.content_en,
            is_published: row.is_published,
            banner_image: row.banner_image,
            text_color: row.text_color,
            background_color: row.background_color,
            layout: PageLayout::from_str(&row.layout).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ContentStore<Page> for PgPageRepository {
    async fn list(&self) -> Result<Vec<Page>, DomainError> {
        let rows: Vec<PageRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pages ORDER BY created_at DESC",
            PAGE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing pages", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Page>, DomainError> {
        let row: Option<PageRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pages WHERE id = $1",
            PAGE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding page by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: PageDraft) -> Result<Page, DomainError> {
        let page = Page::from_draft(Uuid::new_v4(), draft);
        info!("Creating page: {}", page.slug);

        let row: PageRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO pages (
                id, slug, title_mn, title_en, content_mn, content_en, is_published,
                banner_image, text_color, background_color, layout,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            PAGE_COLUMNS
        ))
        .bind(page.id)
        .bind(&page.slug)
        .bind(&page.title_mn)
        .bind(&page.title_en)
        .bind(&page.content_mn)
        .bind(&page.content_en)
        .bind(page.is_published)
        .bind(&page.banner_image)
        .bind(&page.text_color)
        .bind(&page.background_color)
        .bind(page.layout.as_str())
        .bind(page.created_at)
        .bind(page.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating page", e))?;

        Ok(row.into())
    }

    async fn update(&self, id: &Uuid, draft: PageDraft) -> Result<Option<Page>, DomainError> {
        let row: Option<PageRow> = sqlx::query_as(&format!(
            r#"
            UPDATE pages
            SET
                slug = $2,
                title_mn = $3,
                title_en = $4,
                content_mn = $5,
                content_en = $6,
                is_published = $7,
                banner_image = $8,
                text_color = $9,
                background_color = $10,
                layout = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PAGE_COLUMNS
        ))
        .bind(id)
        .bind(&draft.slug)
        .bind(&draft.title_mn)
        .bind(&draft.title_en)
        .bind(&draft.content_mn)
        .bind(&draft.content_en)
        .bind(draft.is_published)
        .bind(&draft.banner_image)
        .bind(&draft.text_color)
        .bind(&draft.background_color)
        .bind(draft.layout.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating page", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting page", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DomainError> {
        let row: Option<PageRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pages WHERE slug = $1",
            PAGE_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding page by slug", e))?;

        Ok(row.map(Into::into))
    }
}
