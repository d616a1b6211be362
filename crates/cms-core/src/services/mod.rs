//! Domain services (business logic)

pub mod menu_tree;
pub mod news_feed;
pub mod content_service;
pub mod page_service;
pub mod menu_service;
pub mod rates;
pub mod loan_calculator;

pub use menu_tree::{build_tree, flatten, MenuNode};
pub use news_feed::{home_spotlight, news_listing, HOME_SPOTLIGHT_LIMIT};
pub use content_service::ContentService;
pub use page_service::PageService;
pub use menu_service::MenuService;
pub use rates::{RatesService, RatesSnapshot};
pub use loan_calculator::{estimate, EstimateRequest, LoanEstimate};
