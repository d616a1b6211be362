// ============================================================================
// CMS Core - Team Member Entity
// File: crates/cms-core/src/domain/team.rs
// Description: Management team entry shown on the about page (upstream-owned)
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name_mn: String,
    pub name_en: String,
    pub position_mn: String,
    pub position_en: String,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeamMemberDraft {
    #[validate(custom(function = "validate_not_blank"))]
    pub name_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name_en: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub position_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub position_en: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Record for TeamMember {
    type Id = i64;
    type Draft = TeamMemberDraft;

    const RESOURCE: &'static str = "team";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn from_draft(id: i64, draft: TeamMemberDraft) -> Self {
        Self {
            id,
            name_mn: draft.name_mn,
            name_en: draft.name_en,
            position_mn: draft.position_mn,
            position_en: draft.position_en,
            image_url: draft.image_url,
            order: draft.order,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: TeamMemberDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}
