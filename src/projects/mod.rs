// src/projects/mod.rs

pub mod api;
pub mod commands;
pub mod models;

// Re-export commonly used items
pub use models::ProjectAnalysis;
