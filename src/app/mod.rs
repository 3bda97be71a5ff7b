pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod config_store;
mod context;
mod controller;
pub mod export;

pub use config_store::ConfigStore;
pub use context::AppContext;
pub use controller::{StepOutcome, WorkflowController};
