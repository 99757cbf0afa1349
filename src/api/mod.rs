//! To-do API integration module.
//!
//! Provides the HTTP client and the records it returns.

pub mod client;
pub mod models;

pub use client::TodoClient;
pub use models::{Todo, User};
