// src/handlers/mod.rs
pub mod api;
pub mod generator;
pub mod processing;
pub mod ui;
pub mod upload;
