//! User-chosen parameters for one wizard session.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::catalog::OTHER;

/// Pick the authoritative value of an enumerated-or-other pair.
///
/// Returns `other` when `primary` equals `sentinel`, otherwise `primary`.
pub fn resolve<'a>(primary: &'a str, other: &'a str, sentinel: &str) -> &'a str {
    if primary == sentinel { other } else { primary }
}

/// Structured writing preferences collected by the wizard.
///
/// Serialized with camelCase keys; missing keys fall back to empty values so
/// records written by older versions still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selections {
    pub task_type: String,
    pub task_type_other: String,
    pub depth: Vec<String>,
    pub context: String,
    pub examples: String,
    pub role: String,
    pub role_other: String,
    pub additional_resources: String,
    pub additional_resources_other: String,
    pub citation_style: String,
    pub specific_examples: String,
    pub audience: String,
    pub audience_other: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram_concept: Option<String>,
}

impl Selections {
    pub fn task(&self) -> &str {
        resolve(&self.task_type, &self.task_type_other, OTHER)
    }

    pub fn resolved_role(&self) -> &str {
        resolve(&self.role, &self.role_other, OTHER)
    }

    pub fn resolved_audience(&self) -> &str {
        resolve(&self.audience, &self.audience_other, OTHER)
    }

    pub fn resources(&self) -> &str {
        resolve(&self.additional_resources, &self.additional_resources_other, OTHER)
    }

    /// Add `option` to the depth set, or remove it when already present.
    pub fn toggle_depth(&mut self, option: &str) {
        if self.has_depth(option) {
            self.depth.retain(|item| item != option);
        } else {
            self.depth.push(option.to_string());
        }
    }

    pub fn has_depth(&self, option: &str) -> bool {
        self.depth.iter().any(|item| item == option)
    }

    /// Labels of required enumerated fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("task", &self.task_type), ("role", &self.role), ("audience", &self.audience)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Check that task type, role and audience are all chosen.
    pub fn validate_required(&self) -> Result<(), AppError> {
        let missing = self.missing_required();
        if missing.is_empty() { Ok(()) } else { Err(AppError::MissingRequiredFields(missing)) }
    }

    /// Diagram type, if one was requested with non-blank text.
    pub fn diagram(&self) -> Option<(&str, Option<&str>)> {
        let kind = self.diagram_type.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let concept = self.diagram_concept.as_deref().map(str::trim).filter(|s| !s.is_empty());
        Some((kind, concept))
    }
}
