// ============================================================================
// CMS Core - News Item Entity
// File: crates/cms-core/src/domain/news.rs
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

/// News article. The two pinning flags are independent: one promotes the
/// item on the news listing, the other on the home page spotlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub banner_image: Option<String>,
    pub category: String,
    pub published_at: NaiveDate,
    pub is_active: bool,
    pub is_pinned_news: bool,
    pub is_pinned_home: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    #[validate(
        length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = 500, message = "Excerpt too long"))]
    #[serde(default)]
    pub excerpt: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[serde(default)]
    pub banner_image: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,

    pub published_at: NaiveDate,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub is_pinned_news: bool,

    #[serde(default)]
    pub is_pinned_home: bool,
}

fn default_active() -> bool {
    true
}

impl Record for NewsItem {
    type Id = Uuid;
    type Draft = NewsDraft;

    const RESOURCE: &'static str = "news";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_draft(id: Uuid, draft: NewsDraft) -> Self {
        Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            banner_image: draft.banner_image,
            category: draft.category,
            published_at: draft.published_at,
            is_active: draft.is_active,
            is_pinned_news: draft.is_pinned_news,
            is_pinned_home: draft.is_pinned_home,
        }
    }

    fn apply_draft(&mut self, draft: NewsDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}
