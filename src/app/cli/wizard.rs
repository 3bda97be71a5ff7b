//! Interactive three-stage wizard.

use std::path::PathBuf;

use dialoguer::{Confirm, Editor, Input, Select};

use super::form::{self, prompt_error};
use crate::adapters::ArboardClipboard;
use crate::adapters::result_export::RESULT_FILE_NAME;
use crate::app::{StepOutcome, WorkflowController, export};
use crate::domain::{AppError, SavedConfig, Stage};
use crate::ports::{CompletionClient, KeyValueStore};

enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Copy)]
enum Action {
    EditParameters,
    Generate,
    Save,
    Load,
    Delete,
    Execute,
    EditPrompt,
    Back,
    Download,
    Copy,
    NewSearch,
    Goto(Stage),
    Quit,
}

pub(super) fn run<C: CompletionClient, S: KeyValueStore>(
    controller: &mut WorkflowController<C, S>,
) -> Result<(), AppError> {
    loop {
        print_header(controller);
        let actions = actions_for(controller);
        let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();

        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|err| prompt_error("action", err))?;
        let Some(index) = selection else {
            return Ok(());
        };

        if let Flow::Quit = perform(controller, actions[index].1)? {
            return Ok(());
        }
    }
}

fn actions_for<C: CompletionClient, S: KeyValueStore>(
    controller: &WorkflowController<C, S>,
) -> Vec<(&'static str, Action)> {
    let mut actions = match controller.stage() {
        Stage::Input => {
            let mut actions = vec![
                ("Edit parameters", Action::EditParameters),
                ("Generate prompt", Action::Generate),
                ("Save configuration", Action::Save),
            ];
            if !controller.saved_configs().is_empty() {
                actions.push(("Load configuration", Action::Load));
                actions.push(("Delete configuration", Action::Delete));
            }
            actions
        }
        Stage::Review => vec![
            ("Execute prompt", Action::Execute),
            ("Edit prompt", Action::EditPrompt),
            ("Back to parameters", Action::Back),
        ],
        Stage::Result => vec![
            ("Download as markdown", Action::Download),
            ("Copy to clipboard", Action::Copy),
            ("New search", Action::NewSearch),
        ],
    };

    for (label, target) in
        [("Go to review", Stage::Review), ("Go to result", Stage::Result)]
    {
        if target != controller.stage() && controller.can_navigate(target) {
            actions.push((label, Action::Goto(target)));
        }
    }
    if controller.stage() != Stage::Input && controller.stage() != Stage::Review {
        actions.push(("Go to parameters", Action::Goto(Stage::Input)));
    }
    actions.push(("Quit", Action::Quit));
    actions
}

fn perform<C: CompletionClient, S: KeyValueStore>(
    controller: &mut WorkflowController<C, S>,
    action: Action,
) -> Result<Flow, AppError> {
    match action {
        Action::EditParameters => {
            controller.clear_error();
            form::edit(controller.selections_mut())?;
        }
        Action::Generate => {
            println!("⏳ Generating prompt...");
            report(controller.prepare());
        }
        Action::Execute => {
            println!("⏳ Running prompt...");
            report(controller.execute());
        }
        Action::EditPrompt => {
            let current = controller.generation().generated_prompt.clone();
            let edited = Editor::new()
                .extension(".md")
                .edit(&current)
                .map_err(|err| AppError::Validation(format!("Failed to open editor: {}", err)))?;
            match edited {
                Some(text) => controller.edit_prompt(text)?,
                None => println!("Prompt unchanged."),
            }
        }
        Action::Back => {
            controller.back()?;
            controller.clear_error();
        }
        Action::NewSearch => {
            controller.reset()?;
            controller.clear_error();
        }
        Action::Goto(stage) => {
            if controller.navigate(stage).map_err(warn).is_ok() {
                controller.clear_error();
            }
        }
        Action::Save => save(controller)?,
        Action::Load => {
            if let Some(config) = pick_config(controller.saved_configs(), "Load configuration")? {
                let loaded = controller.load_config(&config.id)?;
                println!("✅ Loaded '{}'", loaded.name);
            }
        }
        Action::Delete => {
            if let Some(config) = pick_config(controller.saved_configs(), "Delete configuration")? {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete '{}'?", config.name))
                    .default(false)
                    .interact()
                    .map_err(|err| prompt_error("confirmation", err))?;
                if confirmed {
                    controller.delete_config(&config.id)?;
                    println!("✅ Deleted '{}'", config.name);
                }
            }
        }
        Action::Download => download(&controller.generation().final_result)?,
        Action::Copy => {
            let copied = ArboardClipboard::new().and_then(|mut clipboard| {
                export::copy_result(&mut clipboard, &controller.generation().final_result)
            });
            match copied {
                Ok(()) => println!("✅ Copied to clipboard"),
                Err(err) => println!("⚠️  {}", err),
            }
        }
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_header<C: CompletionClient, S: KeyValueStore>(controller: &WorkflowController<C, S>) {
    let steps: Vec<String> = Stage::ALL
        .iter()
        .map(|stage| {
            let label = match stage {
                Stage::Input => "Configure",
                Stage::Review => "Refine",
                Stage::Result => "Result",
            };
            if *stage == controller.stage() {
                format!("[{} {}]", stage.step(), label)
            } else if controller.can_navigate(*stage) {
                format!(" {} {} ", stage.step(), label)
            } else {
                format!(" {} {} (locked)", stage.step(), label)
            }
        })
        .collect();
    println!();
    println!("PromptMaster  {}", steps.join(" > "));

    if let Some(error) = &controller.generation().error {
        println!("❌ Error: {}", error);
    }

    match controller.stage() {
        Stage::Input => print_summary(controller),
        Stage::Review => {
            println!("\n--- Generated prompt ---\n{}\n------------------------", controller.generation().generated_prompt);
        }
        Stage::Result => {
            println!("\n{}\n", controller.generation().final_result);
        }
    }
}

fn print_summary<C: CompletionClient, S: KeyValueStore>(controller: &WorkflowController<C, S>) {
    let selections = controller.selections();
    let show = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };
    println!("  Task:      {}", show(selections.task()));
    println!("  Depth:     {}", show(&selections.depth.join(", ")));
    println!("  Role:      {}", show(selections.resolved_role()));
    println!("  Audience:  {}", show(selections.resolved_audience()));
    println!("  Format:    {}", show(&selections.format));
    if let Some((kind, _)) = selections.diagram() {
        println!("  Diagram:   {}", kind);
    }
}

fn report(outcome: Result<StepOutcome, AppError>) {
    match outcome {
        Ok(StepOutcome::Advanced(stage)) => println!("✅ Moved to {}", stage),
        // Shown in the header on the next render.
        Ok(StepOutcome::Failed(_)) => {}
        Err(err) => println!("⚠️  {}", err),
    }
}

fn warn(err: AppError) {
    println!("⚠️  {}", err);
}

fn save<C: CompletionClient, S: KeyValueStore>(
    controller: &mut WorkflowController<C, S>,
) -> Result<(), AppError> {
    let name: String = Input::new()
        .with_prompt("Configuration name")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| prompt_error("configuration name", err))?;
    match controller.save_config(&name) {
        Ok(saved) => println!("✅ Saved '{}'", saved.name),
        Err(AppError::Validation(message)) => println!("⚠️  {}", message),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn pick_config(configs: &[SavedConfig], prompt: &str) -> Result<Option<SavedConfig>, AppError> {
    let items: Vec<String> = configs.iter().map(describe_config).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| prompt_error("configuration", err))?;
    Ok(selection.map(|index| configs[index].clone()))
}

pub(super) fn describe_config(config: &SavedConfig) -> String {
    let created = config
        .created_at_utc()
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "?".to_string());
    format!("{} ({}, {})", config.name, created, config.selections.task())
}

fn download(result: &str) -> Result<(), AppError> {
    let target: String = Input::new()
        .with_prompt("Save to")
        .with_initial_text(RESULT_FILE_NAME)
        .interact_text()
        .map_err(|err| prompt_error("file path", err))?;
    match export::download_result(&PathBuf::from(target), result) {
        Ok(path) => println!("✅ Saved {}", path.display()),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}
