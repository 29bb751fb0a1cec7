//! The crew layer: one coding agent, one coding task, one opaque engine.
//!
//! A [`Crew`] binds an [`AgentSpec`] and a [`TaskSpec`] to a [`CrewEngine`]
//! backend and runs the whole pipeline for a single request: prompt
//! interpolation, engine kickoff, raw-payload parsing, and validation into
//! a typed [`codesmith_core::schema::CodeResult`].
//!
//! # Main types
//!
//! - [`Crew`] — Front type with `kickoff` / `train` / `replay` / `test`.
//! - [`CrewEngine`] — Backend trait abstracting the model provider.
//! - [`ModelConfig`] — Provider, model id, key, and sampling knobs.
//! - [`AgentSpec`] / [`TaskSpec`] — The agent and task definitions.

/// Provider backends implementing [`CrewEngine`].
pub mod backends;
/// Model provider configuration.
pub mod config;
/// Crew assembly and the kickoff pipeline.
pub mod crew;
/// The engine trait and client dispatch.
pub mod engine;
/// Agent and task definitions with placeholder interpolation.
pub mod spec;

pub use config::{EngineProvider, ModelConfig};
pub use crew::{Crew, CrewOutput, Process, TestReport, TrainRecord};
pub use engine::{CrewEngine, EngineClient};
pub use spec::{AgentSpec, CodeExecutionMode, TaskSpec};
