//! CMS page handlers (admin CRUD and public lookup by slug)

use axum::extract::State;
use uuid::Uuid;

use cms_core::domain::{Page, PageDraft};
use cms_core::services::PageService;

use crate::extract::{ApiJson, ApiPath};
use crate::response::{created, ok, ApiResult, Created, Deleted};

/// GET /api/pages/{slug}
pub async fn published(
    State(pages): State<PageService>,
    ApiPath(slug): ApiPath<String>,
) -> ApiResult<Page> {
    Ok(ok(pages.get_published(&slug).await?))
}

/// GET /api/admin/pages
pub async fn list(State(pages): State<PageService>) -> ApiResult<Vec<Page>> {
    Ok(ok(pages.list().await?))
}

/// GET /api/admin/pages/{id}
pub async fn get_one(
    State(pages): State<PageService>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Page> {
    Ok(ok(pages.get(&id).await?))
}

/// POST /api/admin/pages
pub async fn create(
    State(pages): State<PageService>,
    ApiJson(draft): ApiJson<PageDraft>,
) -> Created<Page> {
    Ok(created(pages.create(draft).await?))
}

/// PUT /api/admin/pages/{id}
pub async fn update(
    State(pages): State<PageService>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(draft): ApiJson<PageDraft>,
) -> ApiResult<Page> {
    Ok(ok(pages.update(&id, draft).await?))
}

/// DELETE /api/admin/pages/{id}
pub async fn delete(
    State(pages): State<PageService>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Deleted<Uuid>> {
    pages.delete(&id).await?;
    Ok(ok(Deleted { id }))
}
