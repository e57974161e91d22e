// Leadstore - lead capture and retrieval backed by SQLite

pub mod config;
pub mod export;
pub mod filter;
pub mod models;
pub mod report;
pub mod store;

// Re-export main types for convenience
pub use filter::{ALL_SOURCES, LeadFilter};
pub use models::{Fuente, Lead, NewLead};
pub use store::Store;
