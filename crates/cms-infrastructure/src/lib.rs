//! # CMS Infrastructure
//!
//! Storage adapters: process-local mock store, PostgreSQL, and the
//! upstream backend service.

pub mod database;
pub mod memory;
pub mod upstream;

pub use database::{create_pool, run_migrations, PgMenuRepository, PgPageRepository};
pub use memory::MemoryStore;
pub use upstream::{UpstreamClient, UpstreamStore};
