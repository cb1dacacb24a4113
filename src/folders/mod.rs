// src/folders/mod.rs

pub mod api;
pub mod commands;
pub mod models;
pub mod validators;


// Re-export commonly used items
pub use models::*;
