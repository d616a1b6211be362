// ============================================================================
// CMS API - Generic CRUD handlers
// File: crates/cms-api/src/handlers/crud.rs
// ============================================================================
//! `/api/admin/{resource}[/{id}]` for every resource backed by a
//! `ContentService`. Instantiated per entity, e.g. `crud::list::<Slide>`.

use axum::extract::State;

use cms_core::domain::Record;
use cms_core::services::ContentService;

use crate::extract::{ApiJson, ApiPath};
use crate::response::{created, ok, ApiResult, Created, Deleted};

pub async fn list<E: Record>(State(service): State<ContentService<E>>) -> ApiResult<Vec<E>> {
    Ok(ok(service.list().await?))
}

pub async fn get_one<E: Record>(
    State(service): State<ContentService<E>>,
    ApiPath(id): ApiPath<E::Id>,
) -> ApiResult<E> {
    Ok(ok(service.get(&id).await?))
}

pub async fn create<E: Record>(
    State(service): State<ContentService<E>>,
    ApiJson(draft): ApiJson<E::Draft>,
) -> Created<E> {
    Ok(created(service.create(draft).await?))
}

pub async fn update<E: Record>(
    State(service): State<ContentService<E>>,
    ApiPath(id): ApiPath<E::Id>,
    ApiJson(draft): ApiJson<E::Draft>,
) -> ApiResult<E> {
    Ok(ok(service.update(&id, draft).await?))
}

pub async fn delete<E: Record>(
    State(service): State<ContentService<E>>,
    ApiPath(id): ApiPath<E::Id>,
) -> ApiResult<Deleted<E::Id>> {
    service.delete(&id).await?;
    Ok(ok(Deleted { id }))
}
