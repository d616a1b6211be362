//! Process-local stores for development and tests

pub mod store;
pub mod seed;

pub use store::MemoryStore;
