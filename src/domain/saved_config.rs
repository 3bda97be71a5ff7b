use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Selections;

/// Key under which the saved configuration list is stored.
pub const SAVED_CONFIGS_KEY: &str = "promptMasterConfigs";

/// Named, timestamped snapshot of a full [`Selections`] instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfig {
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub selections: Selections,
}

impl SavedConfig {
    /// Snapshot `selections` under `name` with a fresh id and the current time.
    pub fn new(name: impl Into<String>, selections: &Selections) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
            selections: selections.clone(),
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.created_at)
    }

    /// Match by exact id, or by case-insensitive name.
    pub fn matches(&self, id_or_name: &str) -> bool {
        self.id == id_or_name || self.name.eq_ignore_ascii_case(id_or_name.trim())
    }
}
