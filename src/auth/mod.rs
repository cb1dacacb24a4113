// src/auth/mod.rs

pub mod api;
pub mod commands;
pub mod models;
pub mod session;


// Re-export commonly used items
pub use models::User;
pub use session::{Session, SessionStore};
