//! Repository traits (ports)

pub mod content_store;
pub mod page_repository;
pub mod menu_repository;

pub use content_store::ContentStore;
pub use page_repository::PageRepository;
pub use menu_repository::MenuRepository;
