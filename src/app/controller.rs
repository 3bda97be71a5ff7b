//! Three-stage wizard state machine.
//!
//! ```text
//! INPUT --prepare--> REVIEW --execute--> RESULT
//!   ^                  |                   |
//!   +------back--------+                   |
//!   +-------------------reset--------------+
//! ```
//!
//! Remote failures are recorded in [`GenerationState::error`] and keep the
//! session in the stage that issued the call. Actions rejected locally
//! (validation, navigation guards) return `Err` and change nothing.

use crate::app::ConfigStore;
use crate::domain::{AppError, GenerationState, SavedConfig, Selections, Stage};
use crate::ports::{CompletionClient, KeyValueStore};

/// Result of an action that issues a remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The call succeeded and the session moved to this stage.
    Advanced(Stage),
    /// The call failed; the message is also stored in the generation state.
    Failed(String),
}

/// Owns the live selections, generation state, and saved configuration list.
pub struct WorkflowController<C: CompletionClient, S: KeyValueStore> {
    client: C,
    store: ConfigStore<S>,
    stage: Stage,
    selections: Selections,
    generation: GenerationState,
    saved: Vec<SavedConfig>,
}

impl<C: CompletionClient, S: KeyValueStore> WorkflowController<C, S> {
    /// Start a session in INPUT with empty selections and the stored list.
    pub fn new(client: C, store: ConfigStore<S>) -> Self {
        let saved = store.load_all();
        Self {
            client,
            store,
            stage: Stage::Input,
            selections: Selections::default(),
            generation: GenerationState::default(),
            saved,
        }
    }

    pub fn with_selections(mut self, selections: Selections) -> Self {
        self.selections = selections;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut Selections {
        &mut self.selections
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    pub fn saved_configs(&self) -> &[SavedConfig] {
        &self.saved
    }

    /// INPUT -> REVIEW: validate, then run the refine call.
    pub fn prepare(&mut self) -> Result<StepOutcome, AppError> {
        self.ensure_idle()?;
        self.ensure_stage(Stage::Input, "prepare")?;
        self.selections.validate_required()?;

        self.generation.begin();
        match self.client.refine(&self.selections) {
            Ok(prompt) => {
                self.generation.finish_prompt(prompt);
                self.stage = Stage::Review;
                Ok(StepOutcome::Advanced(self.stage))
            }
            Err(err) => Ok(self.record_failure("refine", err)),
        }
    }

    /// REVIEW -> RESULT: run the (possibly edited) prompt.
    pub fn execute(&mut self) -> Result<StepOutcome, AppError> {
        self.ensure_idle()?;
        self.ensure_stage(Stage::Review, "execute")?;
        if self.generation.generated_prompt.trim().is_empty() {
            return Err(AppError::Validation("The prompt to execute is empty".into()));
        }

        self.generation.begin();
        match self.client.execute(&self.generation.generated_prompt) {
            Ok(result) => {
                self.generation.finish_result(result);
                self.stage = Stage::Result;
                Ok(StepOutcome::Advanced(self.stage))
            }
            Err(err) => Ok(self.record_failure("execute", err)),
        }
    }

    /// Replace the generated prompt with user-edited text.
    pub fn edit_prompt(&mut self, text: impl Into<String>) -> Result<(), AppError> {
        self.ensure_idle()?;
        self.ensure_stage(Stage::Review, "edit prompt")?;
        self.generation.generated_prompt = text.into();
        Ok(())
    }

    /// REVIEW -> INPUT.
    pub fn back(&mut self) -> Result<(), AppError> {
        self.ensure_idle()?;
        self.ensure_stage(Stage::Review, "back")?;
        self.stage = Stage::Input;
        Ok(())
    }

    /// RESULT -> INPUT, dropping the final result but keeping the prompt.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.ensure_idle()?;
        self.ensure_stage(Stage::Result, "reset")?;
        self.generation.final_result.clear();
        self.stage = Stage::Input;
        Ok(())
    }

    /// Jump directly to a stage whose data already exists.
    pub fn navigate(&mut self, target: Stage) -> Result<(), AppError> {
        self.ensure_idle()?;
        match target {
            Stage::Input => {}
            Stage::Review if !self.generation.has_prompt() => {
                return Err(AppError::NavigationBlocked {
                    target,
                    reason: "no prompt has been generated yet",
                });
            }
            Stage::Result if !self.generation.has_result() => {
                return Err(AppError::NavigationBlocked {
                    target,
                    reason: "no result has been generated yet",
                });
            }
            Stage::Review | Stage::Result => {}
        }
        self.stage = target;
        Ok(())
    }

    pub fn can_navigate(&self, target: Stage) -> bool {
        match target {
            Stage::Input => true,
            Stage::Review => self.generation.has_prompt(),
            Stage::Result => self.generation.has_result(),
        }
    }

    pub fn toggle_depth(&mut self, option: &str) {
        self.selections.toggle_depth(option);
    }

    /// Dismiss the message left by a failed call.
    pub fn clear_error(&mut self) {
        self.generation.error = None;
    }

    /// Save the live selections under `name`.
    pub fn save_config(&mut self, name: &str) -> Result<SavedConfig, AppError> {
        let record = self.store.save(name, &self.selections)?;
        self.saved = self.store.load_all();
        Ok(record)
    }

    /// Replace the live selections with a saved snapshot and restart at INPUT.
    pub fn load_config(&mut self, id_or_name: &str) -> Result<&SavedConfig, AppError> {
        self.ensure_idle()?;
        let index = self
            .saved
            .iter()
            .position(|config| config.id == id_or_name)
            .or_else(|| self.saved.iter().position(|config| config.matches(id_or_name)))
            .ok_or_else(|| AppError::ConfigNotFound(id_or_name.to_string()))?;

        self.selections = self.saved[index].selections.clone();
        self.generation.generated_prompt.clear();
        self.generation.final_result.clear();
        self.stage = Stage::Input;
        Ok(&self.saved[index])
    }

    pub fn delete_config(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id)?;
        self.saved = self.store.load_all();
        Ok(())
    }

    fn record_failure(&mut self, call: &str, err: AppError) -> StepOutcome {
        let message = err.to_string();
        tracing::warn!(call, error = %message, "remote call failed");
        self.generation.fail(message.clone());
        StepOutcome::Failed(message)
    }

    // Mirrors the UI loading gate; blocking calls under `&mut self` never
    // observe `is_loading` set.
    fn ensure_idle(&self) -> Result<(), AppError> {
        if self.generation.is_loading { Err(AppError::Busy) } else { Ok(()) }
    }

    fn ensure_stage(&self, expected: Stage, action: &'static str) -> Result<(), AppError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(AppError::InvalidTransition { action, stage: self.stage })
        }
    }
}
