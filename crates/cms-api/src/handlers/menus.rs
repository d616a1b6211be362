//! Navigation menu handlers

use axum::extract::State;
use uuid::Uuid;

use cms_core::domain::{MenuDraft, MenuItem};
use cms_core::services::{MenuNode, MenuService};

use crate::extract::{ApiJson, ApiPath};
use crate::response::{created, ok, ApiResult, Created, Deleted};

/// GET /api/menu - active items only, as a tree
pub async fn public_tree(State(menu): State<MenuService>) -> ApiResult<Vec<MenuNode>> {
    Ok(ok(menu.public_tree().await?))
}

/// GET /api/admin/menu/tree
pub async fn admin_tree(State(menu): State<MenuService>) -> ApiResult<Vec<MenuNode>> {
    Ok(ok(menu.tree().await?))
}

pub async fn list(State(menu): State<MenuService>) -> ApiResult<Vec<MenuItem>> {
    Ok(ok(menu.list().await?))
}

pub async fn get_one(
    State(menu): State<MenuService>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<MenuItem> {
    Ok(ok(menu.get(&id).await?))
}

pub async fn create(
    State(menu): State<MenuService>,
    ApiJson(draft): ApiJson<MenuDraft>,
) -> Created<MenuItem> {
    Ok(created(menu.create(draft).await?))
}

pub async fn update(
    State(menu): State<MenuService>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(draft): ApiJson<MenuDraft>,
) -> ApiResult<MenuItem> {
    Ok(ok(menu.update(&id, draft).await?))
}

/// DELETE /api/admin/menu/{id} - also removes the direct children
pub async fn delete(
    State(menu): State<MenuService>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Deleted<Uuid>> {
    menu.delete(&id).await?;
    Ok(ok(Deleted { id }))
}
