pub mod catalog;
pub mod config;
mod error;
pub mod prompt;
mod saved_config;
mod selections;
mod workflow;

pub use config::AppConfig;
pub use error::AppError;
pub use prompt::{MetaPrompt, assemble_meta_prompt};
pub use saved_config::{SAVED_CONFIGS_KEY, SavedConfig};
pub use selections::{Selections, resolve};
pub use workflow::{GenerationState, Stage};
