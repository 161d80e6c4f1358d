pub mod client;
pub mod types;
pub mod worker;

// Re-export public types
pub use client::DictionaryClient;
pub use types::{Definition, LookupError, LookupRequest, LookupResponse};
pub use worker::spawn_worker;
