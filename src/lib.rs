//! promptmaster: assemble a structured meta-prompt, refine it with Gemini and run it.
//!
//! The workflow moves through three stages (INPUT, REVIEW, RESULT) driven by
//! [`WorkflowController`]; saved form configurations persist as JSON through a
//! [`KeyValueStore`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{FilesystemKeyValueStore, HttpGeminiClient, MemoryKeyValueStore};
pub use app::api::{RunOptions, RunResult};
pub use app::{AppContext, ConfigStore, StepOutcome, WorkflowController};
pub use domain::{
    AppConfig, AppError, GenerationState, MetaPrompt, SavedConfig, Selections, Stage,
    assemble_meta_prompt,
};
pub use ports::{ClipboardWriter, CompletionClient, KeyValueStore};
