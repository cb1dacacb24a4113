// src/jobs/mod.rs

pub mod api;
pub mod commands;
pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
