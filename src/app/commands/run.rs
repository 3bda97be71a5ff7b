//! Non-interactive INPUT -> REVIEW -> RESULT run.

use crate::app::{AppContext, StepOutcome, WorkflowController};
use crate::domain::{AppError, Selections};
use crate::ports::{CompletionClient, KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub selections: Selections,
    /// Stop after the refine call.
    pub prompt_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub prompt: String,
    pub result: Option<String>,
}

pub fn execute<C: CompletionClient, S: KeyValueStore>(
    ctx: AppContext<C, S>,
    options: RunOptions,
) -> Result<RunResult, AppError> {
    let (client, store) = ctx.into_parts();
    let mut controller = WorkflowController::new(client, store).with_selections(options.selections);

    if let StepOutcome::Failed(message) = controller.prepare()? {
        return Err(AppError::CompletionApi { message, status: None });
    }
    let prompt = controller.generation().generated_prompt.clone();
    if options.prompt_only {
        return Ok(RunResult { prompt, result: None });
    }

    if let StepOutcome::Failed(message) = controller.execute()? {
        return Err(AppError::CompletionApi { message, status: None });
    }
    Ok(RunResult { prompt, result: Some(controller.generation().final_result.clone()) })
}
