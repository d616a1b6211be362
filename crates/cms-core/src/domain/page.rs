// ============================================================================
// CMS Core - Page Entity
// File: crates/cms-core/src/domain/page.rs
// Description: Bilingual CMS page addressed by a unique slug
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::record::Record;
use super::validation::{validate_hex_color, validate_not_blank, validate_slug};

/// Page layout presets understood by the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    #[default]
    Default,
    FullWidth,
    Sidebar,
}

impl PageLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageLayout::Default => "default",
            PageLayout::FullWidth => "full_width",
            PageLayout::Sidebar => "sidebar",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(PageLayout::Default),
            "full_width" => Some(PageLayout::FullWidth),
            "sidebar" => Some(PageLayout::Sidebar),
            _ => None,
        }
    }
}

/// CMS page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub title_mn: String,
    pub title_en: String,
    pub content_mn: String,
    pub content_en: String,
    pub is_published: bool,

    // Style
    pub banner_image: Option<String>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub layout: PageLayout,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PageDraft {
    #[validate(
        length(min = 2, max = 100, message = "Slug must be between 2 and 100 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(custom(function = "validate_not_blank"), length(max = 255))]
    pub title_mn: String,

    #[validate(custom(function = "validate_not_blank"), length(max = 255))]
    pub title_en: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content_en: String,

    #[serde(default = "default_published")]
    pub is_published: bool,

    #[serde(default)]
    pub banner_image: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    #[serde(default)]
    pub text_color: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    #[serde(default)]
    pub background_color: Option<String>,

    #[serde(default)]
    pub layout: PageLayout,
}

fn default_published() -> bool {
    true
}

impl Record for Page {
    type Id = Uuid;
    type Draft = PageDraft;

    const RESOURCE: &'static str = "pages";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_draft(id: Uuid, draft: PageDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug: draft.slug,
            title_mn: draft.title_mn,
            title_en: draft.title_en,
            content_mn: draft.content_mn,
            content_en: draft.content_en,
            is_published: draft.is_published,
            banner_image: draft.banner_image,
            text_color: draft.text_color,
            background_color: draft.background_color,
            layout: draft.layout,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: PageDraft) {
        self.slug = draft.slug;
        self.title_mn = draft.title_mn;
        self.title_en = draft.title_en;
        self.content_mn = draft.content_mn;
        self.content_en = draft.content_en;
        self.is_published = draft.is_published;
        self.banner_image = draft.banner_image;
        self.text_color = draft.text_color;
        self.background_color = draft.background_color;
        self.layout = draft.layout;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about_us() -> PageDraft {
        serde_json::from_str(
            r#"{"slug":"about-us","title_mn":"Бидний тухай","title_en":"About Us","content_mn":"x","content_en":"y"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_published_by_default() {
        let draft = about_us();
        assert!(draft.is_published);
        assert!(draft.validate().is_ok());

        let page = Page::from_draft(Uuid::new_v4(), draft);
        assert_eq!(page.layout, PageLayout::Default);
        assert_eq!(page.created_at, page.updated_at);
    }

    #[test]
    fn test_missing_content_rejected() {
        let result: Result<PageDraft, _> =
            serde_json::from_str(r#"{"slug":"about-us","title_mn":"a","title_en":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_style_rejected() {
        let mut draft = about_us();
        draft.text_color = Some("blue".to_string());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut page = Page::from_draft(Uuid::new_v4(), about_us());
        let id = page.id;
        let created_at = page.created_at;

        let mut draft = about_us();
        draft.title_en = "About the company".to_string();
        page.apply_draft(draft);

        assert_eq!(page.id, id);
        assert_eq!(page.created_at, created_at);
        assert_eq!(page.title_en, "About the company");
        assert!(page.updated_at >= created_at);
    }
}
