// ============================================================================
// CMS Core - Stat Entity
// File: crates/cms-core/src/domain/stat.rs
// Description: Headline figure for the animated counters (upstream-owned)
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: i64,
    pub label_mn: String,
    pub label_en: String,
    pub value: f64,
    pub suffix: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatDraft {
    #[validate(custom(function = "validate_not_blank"))]
    pub label_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub label_en: String,

    #[validate(range(min = 0.0, message = "Stat value must not be negative"))]
    pub value: f64,

    #[validate(length(max = 10))]
    #[serde(default)]
    pub suffix: Option<String>,

    #[serde(default)]
    pub order: i32,
}

impl Record for Stat {
    type Id = i64;
    type Draft = StatDraft;

    const RESOURCE: &'static str = "stats";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn from_draft(id: i64, draft: StatDraft) -> Self {
        Self {
            id,
            label_mn: draft.label_mn,
            label_en: draft.label_en,
            value: draft.value,
            suffix: draft.suffix,
            order: draft.order,
        }
    }

    fn apply_draft(&mut self, draft: StatDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}
