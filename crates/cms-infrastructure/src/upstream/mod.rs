//! Upstream backend adapter

pub mod client;
pub mod store;

pub use client::UpstreamClient;
pub use store::UpstreamStore;
