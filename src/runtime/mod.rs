pub mod cache;
pub mod fetcher;
pub mod orchestrator;
pub mod store;
pub mod types;
