// src/services/mod.rs
pub mod content_provider;
pub mod intake;
pub mod processing;

pub use content_provider::{ContentProvider, MockContentProvider};
