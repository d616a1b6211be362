// ============================================================================
// CMS Core - Slide Entity
// File: crates/cms-core/src/domain/slide.rs
// Description: Hero slider entry on the home page
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: Uuid,
    pub title_mn: String,
    pub title_en: String,
    pub subtitle_mn: Option<String>,
    pub subtitle_en: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlideDraft {
    #[validate(custom(function = "validate_not_blank"), length(max = 255))]
    pub title_mn: String,

    #[validate(custom(function = "validate_not_blank"), length(max = 255))]
    pub title_en: String,

    #[serde(default)]
    pub subtitle_mn: Option<String>,

    #[serde(default)]
    pub subtitle_en: Option<String>,

    #[validate(length(min = 1, message = "Slide image is required"))]
    pub image_url: String,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Record for Slide {
    type Id = Uuid;
    type Draft = SlideDraft;

    const RESOURCE: &'static str = "slides";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_draft(id: Uuid, draft: SlideDraft) -> Self {
        Self {
            id,
            title_mn: draft.title_mn,
            title_en: draft.title_en,
            subtitle_mn: draft.subtitle_mn,
            subtitle_en: draft.subtitle_en,
            image_url: draft.image_url,
            link: draft.link,
            order: draft.order,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: SlideDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}
