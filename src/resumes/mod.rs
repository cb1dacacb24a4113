// src/resumes/mod.rs

pub mod api;
pub mod commands;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
