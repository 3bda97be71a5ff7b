//! API facade for the application.
//!
//! Builds the production context (Gemini HTTP client plus filesystem storage)
//! from configuration and runs commands against it.

use std::path::Path;

use crate::adapters::{FilesystemKeyValueStore, HttpGeminiClient};
use crate::app::commands::{configs, run};
use crate::app::{AppContext, WorkflowController, config};
use crate::domain::{AppError, MetaPrompt, SavedConfig, Selections, assemble_meta_prompt};

pub use crate::app::commands::run::{RunOptions, RunResult};

pub type ProductionContext = AppContext<HttpGeminiClient, FilesystemKeyValueStore>;
pub type ProductionController = WorkflowController<HttpGeminiClient, FilesystemKeyValueStore>;

/// Build the production context, reading the API key from the environment.
pub fn create_context(config_path: Option<&Path>) -> Result<ProductionContext, AppError> {
    let config = config::load_config(config_path)?;
    let client = HttpGeminiClient::from_env(&config)?;
    let storage = FilesystemKeyValueStore::new(config::storage_dir(&config)?);
    tracing::debug!(storage = %storage.root().display(), ?client, "context created");
    Ok(AppContext::new(client, storage))
}

/// Start an interactive session.
pub fn open_session(config_path: Option<&Path>) -> Result<ProductionController, AppError> {
    let (client, store) = create_context(config_path)?.into_parts();
    Ok(WorkflowController::new(client, store))
}

/// Render the meta-prompt without contacting the service.
pub fn preview(selections: &Selections) -> Result<MetaPrompt, AppError> {
    assemble_meta_prompt(selections)
}

pub fn run(config_path: Option<&Path>, options: RunOptions) -> Result<RunResult, AppError> {
    run::execute(create_context(config_path)?, options)
}

pub fn list_configs(config_path: Option<&Path>) -> Result<Vec<SavedConfig>, AppError> {
    Ok(configs::list(&create_context(config_path)?))
}

pub fn show_config(config_path: Option<&Path>, id_or_name: &str) -> Result<SavedConfig, AppError> {
    configs::show(&create_context(config_path)?, id_or_name)
}

pub fn delete_config(
    config_path: Option<&Path>,
    id_or_name: &str,
) -> Result<SavedConfig, AppError> {
    configs::delete(&create_context(config_path)?, id_or_name)
}
