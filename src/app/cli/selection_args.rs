use clap::Args;

use crate::domain::catalog::{
    self, AUDIENCES, CITATION_FORMATS, DEPTH_OPTIONS, FORMATS, RESOURCE_TYPES, ROLES, TASK_TYPES,
};
use crate::domain::{AppError, Selections};

/// Selection flags shared by `preview` and `run`.
///
/// Values outside the catalogs for task, role, resources and audience are
/// taken as free text.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Start from a saved configuration (id or name)
    #[arg(long = "from", value_name = "ID|NAME")]
    pub from: Option<String>,
    /// Task type, e.g. "Artículo"
    #[arg(short, long)]
    pub task: Option<String>,
    /// Depth descriptor (repeatable); catalog prefixes such as "overview" are accepted
    #[arg(short, long = "depth")]
    pub depth: Vec<String>,
    /// Background context
    #[arg(long)]
    pub context: Option<String>,
    /// Input examples
    #[arg(long)]
    pub examples: Option<String>,
    /// Role the model should assume
    #[arg(short, long)]
    pub role: Option<String>,
    /// Additional resources to request
    #[arg(long)]
    pub resources: Option<String>,
    /// Citation style
    #[arg(long)]
    pub citation: Option<String>,
    /// Specific examples to include in the output
    #[arg(long)]
    pub specific_examples: Option<String>,
    /// Target audience
    #[arg(short, long)]
    pub audience: Option<String>,
    /// Output format
    #[arg(short, long)]
    pub format: Option<String>,
    /// Diagram to include
    #[arg(long)]
    pub diagram_type: Option<String>,
    /// What the diagram should represent
    #[arg(long, requires = "diagram_type")]
    pub diagram_concept: Option<String>,
}

impl SelectionArgs {
    /// Overlay the given flags on `base`.
    ///
    /// Depth, citation and format must name catalog entries; an empty
    /// citation or format clears the field.
    pub fn apply(self, mut base: Selections) -> Result<Selections, AppError> {
        if let Some(task) = self.task {
            (base.task_type, base.task_type_other) = catalog::classify(TASK_TYPES, &task);
        }
        for value in &self.depth {
            let option = match_depth(value)?;
            if !base.has_depth(option) {
                base.toggle_depth(option);
            }
        }
        if let Some(context) = self.context {
            base.context = context;
        }
        if let Some(examples) = self.examples {
            base.examples = examples;
        }
        if let Some(role) = self.role {
            (base.role, base.role_other) = catalog::classify(ROLES, &role);
        }
        if let Some(resources) = self.resources {
            (base.additional_resources, base.additional_resources_other) =
                catalog::classify(RESOURCE_TYPES, &resources);
        }
        if let Some(citation) = self.citation {
            base.citation_style = closed_choice("citation style", CITATION_FORMATS, &citation)?;
        }
        if let Some(specific) = self.specific_examples {
            base.specific_examples = specific;
        }
        if let Some(audience) = self.audience {
            (base.audience, base.audience_other) = catalog::classify(AUDIENCES, &audience);
        }
        if let Some(format) = self.format {
            base.format = closed_choice("format", FORMATS, &format)?;
        }
        if self.diagram_type.is_some() {
            base.diagram_type = self.diagram_type;
            base.diagram_concept = self.diagram_concept;
        }
        Ok(base)
    }
}

fn closed_choice(what: &str, options: &[&'static str], value: &str) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }
    catalog::lookup(options, value).map(str::to_string).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown {} '{}'; expected one of: {}",
            what,
            value.trim(),
            options.join(", ")
        ))
    })
}

/// Exact catalog entry, or the single entry starting with `value`.
fn match_depth(value: &str) -> Result<&'static str, AppError> {
    if let Some(option) = catalog::lookup(DEPTH_OPTIONS, value) {
        return Ok(option);
    }
    let needle = value.trim().to_lowercase();
    let candidates: Vec<&'static str> = if needle.is_empty() {
        Vec::new()
    } else {
        DEPTH_OPTIONS
            .iter()
            .copied()
            .filter(|option| option.to_lowercase().starts_with(&needle))
            .collect()
    };
    match candidates.as_slice() {
        [option] => Ok(*option),
        [] => Err(AppError::Validation(format!(
            "Unknown depth '{}'; expected one of: {}",
            value.trim(),
            DEPTH_OPTIONS.join(", ")
        ))),
        _ => Err(AppError::Validation(format!(
            "Ambiguous depth '{}' matches: {}",
            value.trim(),
            candidates.join(", ")
        ))),
    }
}
