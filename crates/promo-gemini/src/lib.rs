//! Gemini-backed orchestration core for the marketing studio.
//!
//! This crate is the only part of the workspace that talks to the model
//! provider. It is organised as:
//!
//! - [`prompts`]: pure builders from typed parameters to instruction + schema,
//! - [`models`]: the static task-to-model routing table,
//! - [`types`]: `generateContent` wire types,
//! - [`client`]: the HTTP client (one attempt per call, no retries),
//! - [`studio`]: high-level operations with normalized, total fallbacks.

pub mod client;
pub mod error;
pub mod models;
pub mod prompts;
pub mod studio;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use models::{ModelTier, StudioTask};
pub use prompts::PromptSpec;
pub use studio::MarketingStudio;
