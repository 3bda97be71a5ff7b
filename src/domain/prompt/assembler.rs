use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::assets;
use crate::domain::{AppError, Selections};

const NOT_SPECIFIED: &str = "No especificado";
const NONE: &str = "Ninguno";
const NOT_REQUESTED: &str = "No solicitado";
const DIAGRAM_SYNTAX_HINT: &str =
    "Si es posible, usar sintaxis Mermaid.js o ASCII art para la representación visual.";

/// Instruction pair sent to the refine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPrompt {
    /// Fixed persona and structure instruction.
    pub system_instruction: String,
    /// Per-call block interpolating the resolved selections.
    pub content: String,
}

/// Resolved, placeholder-filled values in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptFields {
    pub task: String,
    pub depth: String,
    pub context: String,
    pub examples: String,
    pub role: String,
    pub diagram: String,
    pub resources: String,
    pub citation_style: String,
    pub specific_examples: String,
    pub audience: String,
    pub format: String,
}

impl PromptFields {
    pub fn from_selections(selections: &Selections) -> Self {
        Self {
            task: or_placeholder(selections.task(), NOT_SPECIFIED),
            depth: or_placeholder(&selections.depth.join(", "), NOT_SPECIFIED),
            context: or_placeholder(&selections.context, NOT_SPECIFIED),
            examples: or_placeholder(&selections.examples, NONE),
            role: or_placeholder(selections.resolved_role(), NOT_SPECIFIED),
            diagram: diagram_request(selections),
            resources: or_placeholder(selections.resources(), NONE),
            citation_style: or_placeholder(&selections.citation_style, NOT_SPECIFIED),
            specific_examples: or_placeholder(&selections.specific_examples, NOT_REQUESTED),
            audience: or_placeholder(selections.resolved_audience(), NOT_SPECIFIED),
            format: or_placeholder(&selections.format, NOT_SPECIFIED),
        }
    }
}

/// Build the meta-prompt for `selections`.
pub fn assemble_meta_prompt(selections: &Selections) -> Result<MetaPrompt, AppError> {
    let fields = PromptFields::from_selections(selections);
    let system_instruction = assets::template(assets::SYSTEM_INSTRUCTION)?.trim().to_string();
    let content = render(assets::REQUEST, &fields)?;
    Ok(MetaPrompt { system_instruction, content })
}

/// Text sent verbatim to the execute call.
pub fn execution_prompt(generated_prompt: &str) -> &str {
    generated_prompt
}

fn diagram_request(selections: &Selections) -> String {
    let Some((kind, concept)) = selections.diagram() else {
        return NOT_REQUESTED.to_string();
    };
    let mut request = format!("Incluir {}", kind);
    if let Some(concept) = concept {
        request.push_str(&format!(" para representar: \"{}\"", concept));
    }
    request.push_str(". ");
    request.push_str(DIAGRAM_SYNTAX_HINT);
    request
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder.to_string() } else { trimmed.to_string() }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(name: &str, fields: &PromptFields) -> Result<String, AppError> {
    let source = assets::template(name)?;
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });
    env.render_str(source, fields)
        .map(|rendered| rendered.trim().to_string())
        .map_err(|err| AppError::PromptAssembly(format!("Failed to render {}: {}", name, err)))
}
