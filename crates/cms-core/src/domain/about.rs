// ============================================================================
// CMS Core - About Section Entity
// File: crates/cms-core/src/domain/about.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

/// Block of the about page; owned by the upstream backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: i64,
    pub title_mn: String,
    pub title_en: String,
    pub content_mn: String,
    pub content_en: String,
    pub image_url: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AboutSectionDraft {
    #[validate(custom(function = "validate_not_blank"))]
    pub title_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title_en: String,

    #[serde(default)]
    pub content_mn: String,

    #[serde(default)]
    pub content_en: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub order: i32,
}

impl Record for AboutSection {
    type Id = i64;
    type Draft = AboutSectionDraft;

    const RESOURCE: &'static str = "about";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn from_draft(id: i64, draft: AboutSectionDraft) -> Self {
        Self {
            id,
            title_mn: draft.title_mn,
            title_en: draft.title_en,
            content_mn: draft.content_mn,
            content_en: draft.content_en,
            image_url: draft.image_url,
            order: draft.order,
        }
    }

    fn apply_draft(&mut self, draft: AboutSectionDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}
