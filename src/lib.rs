//! Forwards code-review prompts to Gemini's `generateContent` endpoint.

pub mod config;
pub mod forwarder;
pub mod rest_gemini_client;

pub use config::{Config, ConfigError};
pub use forwarder::{PromptForwarder, TextGenerator};
pub use rest_gemini_client::{ApiError, GeminiClient};
