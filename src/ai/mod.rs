//! All AI/LLM functionality

pub mod client;
pub mod extract;

// Re-export main types for convenience
pub use client::LlmClient;
pub use extract::extract_json;
