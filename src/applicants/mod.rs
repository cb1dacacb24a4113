// src/applicants/mod.rs

pub mod api;
pub mod browser;
pub mod commands;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
