// HTTP client adapter for the SmartHire API

pub mod client;

pub use client::ApiClient;
