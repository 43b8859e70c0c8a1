// src/models/mod.rs
pub mod content;
pub mod intake;
pub mod settings;
