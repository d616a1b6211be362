//! # CMS Core - Domain Module
//!
//! Content entities managed by the admin panel and read by the public site.

pub mod record;
pub mod validation;
pub mod menu;
pub mod news;
pub mod page;
pub mod branch;
pub mod slide;
pub mod team;
pub mod stat;
pub mod about;
pub mod calculator;
pub mod rate;

// Re-export all entities and drafts
pub use record::{Record, RecordId};
pub use menu::{MenuItem, MenuDraft};
pub use news::{NewsItem, NewsDraft};
pub use page::{Page, PageDraft, PageLayout};
pub use branch::{Branch, BranchDraft};
pub use slide::{Slide, SlideDraft};
pub use team::{TeamMember, TeamMemberDraft};
pub use stat::{Stat, StatDraft};
pub use about::{AboutSection, AboutSectionDraft};
pub use calculator::{CalculatorConfig, CalculatorConfigDraft};
pub use rate::{RateCategory, RateQuote};
