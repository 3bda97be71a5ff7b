//! Saved configuration listing and removal.

use crate::app::AppContext;
use crate::domain::{AppError, SavedConfig};
use crate::ports::{CompletionClient, KeyValueStore};

pub fn list<C: CompletionClient, S: KeyValueStore>(ctx: &AppContext<C, S>) -> Vec<SavedConfig> {
    ctx.store().load_all()
}

pub fn show<C: CompletionClient, S: KeyValueStore>(
    ctx: &AppContext<C, S>,
    id_or_name: &str,
) -> Result<SavedConfig, AppError> {
    ctx.store().find(id_or_name).ok_or_else(|| AppError::ConfigNotFound(id_or_name.to_string()))
}

/// Delete by id or name, returning the removed record.
pub fn delete<C: CompletionClient, S: KeyValueStore>(
    ctx: &AppContext<C, S>,
    id_or_name: &str,
) -> Result<SavedConfig, AppError> {
    let record = show(ctx, id_or_name)?;
    ctx.store().delete(&record.id)?;
    Ok(record)
}
