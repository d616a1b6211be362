// ============================================================================
// CMS Core - Menu Item Entity
// File: crates/cms-core/src/domain/menu.rs
// Description: Navigation entry, flat record with an optional parent
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::record::Record;
use super::validation::validate_not_blank;

/// Menu item as stored; the hierarchy is rebuilt from `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub title: String,
    pub href: String,
    pub order: i32,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuDraft {
    #[validate(
        length(min = 1, max = 100, message = "Menu title must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Menu href must be between 1 and 255 characters"))]
    pub href: String,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

fn default_active() -> bool {
    true
}

impl MenuItem {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Record for MenuItem {
    type Id = Uuid;
    type Draft = MenuDraft;

    const RESOURCE: &'static str = "menu";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_draft(id: Uuid, draft: MenuDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            href: draft.href.trim().to_string(),
            order: draft.order,
            is_active: draft.is_active,
            parent_id: draft.parent_id,
        }
    }

    fn apply_draft(&mut self, draft: MenuDraft) {
        self.title = draft.title.trim().to_string();
        self.href = draft.href.trim().to_string();
        self.order = draft.order;
        self.is_active = draft.is_active;
        self.parent_id = draft.parent_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft: MenuDraft =
            serde_json::from_str(r#"{"title":"Loans","href":"/loans"}"#).unwrap();
        assert!(draft.is_active);
        assert_eq!(draft.order, 0);
        assert!(draft.parent_id.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let draft: MenuDraft =
            serde_json::from_str(r#"{"title":"   ","href":"/loans"}"#).unwrap();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_from_draft_trims() {
        let draft: MenuDraft =
            serde_json::from_str(r#"{"title":" Home ","href":" / ","order":2}"#).unwrap();
        let item = MenuItem::from_draft(Uuid::new_v4(), draft);
        assert_eq!(item.title, "Home");
        assert_eq!(item.href, "/");
        assert!(item.is_root());
    }
}
