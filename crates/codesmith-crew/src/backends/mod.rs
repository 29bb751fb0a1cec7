//! Provider backends for the [`crate::CrewEngine`] trait.
//!
//! To add a provider that is not OpenAI-compatible: create a module here,
//! implement `CrewEngine` for its struct, and wire it up in
//! `EngineClient::new()` in `engine.rs`.

/// OpenAI-compatible chat-completions backend.
pub mod http;
