//! Interactive editor for the selections form.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::catalog::{
    AUDIENCES, CITATION_FORMATS, DEPTH_OPTIONS, FORMATS, OTHER, RESOURCE_TYPES, ROLES, TASK_TYPES,
};
use crate::domain::{AppError, Selections};

const NONE_OPTION: &str = "(none)";

/// Walk through every field, keeping the current value as the default.
///
/// Escape on a menu keeps the field unchanged.
pub(super) fn edit(selections: &mut Selections) -> Result<(), AppError> {
    select_open(
        "Task type *",
        TASK_TYPES,
        false,
        &mut selections.task_type,
        &mut selections.task_type_other,
    )?;
    edit_depth(selections)?;
    text("Context", &mut selections.context)?;
    text("Input examples", &mut selections.examples)?;
    select_open("Role *", ROLES, false, &mut selections.role, &mut selections.role_other)?;
    select_open(
        "Additional resources",
        RESOURCE_TYPES,
        true,
        &mut selections.additional_resources,
        &mut selections.additional_resources_other,
    )?;
    select_closed("Citation style", CITATION_FORMATS, true, &mut selections.citation_style)?;
    text("Specific examples to include", &mut selections.specific_examples)?;
    select_open(
        "Audience *",
        AUDIENCES,
        false,
        &mut selections.audience,
        &mut selections.audience_other,
    )?;
    select_closed("Output format", FORMATS, false, &mut selections.format)?;
    edit_diagram(selections)
}

fn select_open(
    prompt: &str,
    catalog: &[&str],
    optional: bool,
    choice: &mut String,
    other: &mut String,
) -> Result<(), AppError> {
    select_closed(prompt, catalog, optional, choice)?;
    if *choice == OTHER {
        text(&format!("{} (free text)", prompt.trim_end_matches(" *")), other)?;
    }
    Ok(())
}

fn select_closed(
    prompt: &str,
    catalog: &[&str],
    optional: bool,
    choice: &mut String,
) -> Result<(), AppError> {
    let mut items: Vec<&str> = Vec::with_capacity(catalog.len() + 1);
    if optional {
        items.push(NONE_OPTION);
    }
    items.extend_from_slice(catalog);

    let default = items.iter().position(|item| *item == choice.as_str()).unwrap_or(0);
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| prompt_error(prompt, err))?;

    match selection.map(|index| items[index]) {
        Some(NONE_OPTION) => choice.clear(),
        Some(item) => *choice = item.to_string(),
        None => {}
    }
    Ok(())
}

fn edit_depth(selections: &mut Selections) -> Result<(), AppError> {
    let defaults: Vec<bool> =
        DEPTH_OPTIONS.iter().map(|option| selections.has_depth(option)).collect();
    let chosen = MultiSelect::new()
        .with_prompt("Depth / breadth (space to toggle)")
        .items(DEPTH_OPTIONS)
        .defaults(&defaults)
        .interact_opt()
        .map_err(|err| prompt_error("depth", err))?;

    let Some(chosen) = chosen else {
        return Ok(());
    };
    for (index, option) in DEPTH_OPTIONS.iter().enumerate() {
        if chosen.contains(&index) != defaults[index] {
            selections.toggle_depth(option);
        }
    }
    Ok(())
}

fn edit_diagram(selections: &mut Selections) -> Result<(), AppError> {
    let wanted = Confirm::new()
        .with_prompt("Include a diagram?")
        .default(selections.diagram().is_some())
        .interact()
        .map_err(|err| prompt_error("diagram", err))?;

    if !wanted {
        selections.diagram_type = None;
        selections.diagram_concept = None;
        return Ok(());
    }

    let mut kind = selections.diagram_type.clone().unwrap_or_default();
    let mut concept = selections.diagram_concept.clone().unwrap_or_default();
    text("Diagram type", &mut kind)?;
    text("Concept to represent", &mut concept)?;
    selections.diagram_type = Some(kind).filter(|value| !value.trim().is_empty());
    selections.diagram_concept = Some(concept).filter(|value| !value.trim().is_empty());
    Ok(())
}

fn text(prompt: &str, value: &mut String) -> Result<(), AppError> {
    *value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(value.as_str())
        .allow_empty(true)
        .interact_text()
        .map_err(|err| prompt_error(prompt, err))?;
    Ok(())
}

pub(super) fn prompt_error(what: &str, err: dialoguer::Error) -> AppError {
    AppError::Validation(format!("Failed to read {}: {}", what.trim_end_matches(" *"), err))
}
