//! Public news feed

use axum::extract::State;
use uuid::Uuid;

use cms_core::domain::{NewsItem, Record};
use cms_core::error::DomainError;
use cms_core::services::news_feed::active_only;
use cms_core::services::{home_spotlight, news_listing, ContentService};

use crate::extract::ApiPath;
use crate::response::{ok, ApiResult};

/// GET /api/news - pinned items first, newest first within each group
pub async fn listing(State(news): State<ContentService<NewsItem>>) -> ApiResult<Vec<NewsItem>> {
    let items = active_only(news.list().await?);
    Ok(ok(news_listing(&items)))
}

/// GET /api/news/home
pub async fn spotlight(State(news): State<ContentService<NewsItem>>) -> ApiResult<Vec<NewsItem>> {
    let items = active_only(news.list().await?);
    Ok(ok(home_spotlight(&items)))
}

/// GET /api/news/{id}
pub async fn article(
    State(news): State<ContentService<NewsItem>>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<NewsItem> {
    let item = news.get(&id).await?;
    if !item.is_active {
        return Err(DomainError::not_found(NewsItem::RESOURCE, id).into());
    }
    Ok(ok(item))
}
