// src/models/mod.rs

//! Domain models for the crawler application.

mod config;
mod event;
mod opportunity;

// Re-export all public types
pub use config::{Config, HttpConfig, LimitsConfig, SourcesConfig};
pub use event::{Event, RssEvent};
pub use opportunity::Opportunity;
