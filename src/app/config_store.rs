//! Saved configuration persistence.
//!
//! The whole list is serialized under one storage key and rewritten on every
//! save or delete. Concurrent writers to the same key are not coordinated;
//! the last write wins.

use crate::domain::{AppError, SAVED_CONFIGS_KEY, SavedConfig, Selections};
use crate::ports::KeyValueStore;

/// Load/save/delete of named [`SavedConfig`] snapshots over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct ConfigStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read every saved configuration, newest first.
    ///
    /// Absent, unreadable, or unparseable data yields an empty list.
    pub fn load_all(&self) -> Vec<SavedConfig> {
        let raw = match self.storage.get(SAVED_CONFIGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved configurations");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SavedConfig>>(&raw) {
            Ok(configs) => configs,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unparseable saved configurations");
                Vec::new()
            }
        }
    }

    /// Snapshot `selections` under `name` and prepend it to the stored list.
    pub fn save(&self, name: &str, selections: &Selections) -> Result<SavedConfig, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Configuration name must not be empty".into()));
        }

        let record = SavedConfig::new(name, selections);
        let mut configs = self.load_all();
        configs.insert(0, record.clone());
        self.persist(&configs)?;
        tracing::debug!(id = %record.id, name = %record.name, "saved configuration");
        Ok(record)
    }

    /// Remove the record with `id`. Unknown ids leave storage untouched.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut configs = self.load_all();
        let before = configs.len();
        configs.retain(|config| config.id != id);
        if configs.len() == before {
            return Ok(());
        }
        self.persist(&configs)
    }

    /// Find a record by id or case-insensitive name.
    pub fn find(&self, id_or_name: &str) -> Option<SavedConfig> {
        let configs = self.load_all();
        configs
            .iter()
            .find(|config| config.id == id_or_name)
            .or_else(|| configs.iter().find(|config| config.matches(id_or_name)))
            .cloned()
    }

    fn persist(&self, configs: &[SavedConfig]) -> Result<(), AppError> {
        let payload = serde_json::to_string(configs)?;
        self.storage.set(SAVED_CONFIGS_KEY, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryKeyValueStore;

    fn selections() -> Selections {
        Selections {
            task_type: "Reporte técnico".into(),
            depth: vec!["Outline (Punteo/Índice/Esquema)".into()],
            role: "Otro".into(),
            role_other: "Chef".into(),
            audience: "Colegas".into(),
            diagram_type: Some("Secuencia".into()),
            ..Default::default()
        }
    }

    #[test]
    fn save_then_load_round_trips_selections() {
        let store = ConfigStore::new(MemoryKeyValueStore::new());
        let saved = store.save("Semanal", &selections()).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, saved.id);
        assert_eq!(loaded[0].name, "Semanal");
        assert_eq!(loaded[0].selections, selections());
    }

    #[test]
    fn save_prepends_newest() {
        let store = ConfigStore::new(MemoryKeyValueStore::new());
        store.save("first", &selections()).unwrap();
        store.save("second", &Selections::default()).unwrap();

        let names: Vec<String> = store.load_all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn save_rejects_blank_name() {
        let storage = MemoryKeyValueStore::new();
        let store = ConfigStore::new(storage.clone());
        assert!(matches!(store.save("  ", &selections()), Err(AppError::Validation(_))));
        assert_eq!(storage.raw(SAVED_CONFIGS_KEY), None);
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let store = ConfigStore::new(MemoryKeyValueStore::new());
        let keep = store.save("keep", &selections()).unwrap();
        let drop = store.save("drop", &selections()).unwrap();

        store.delete(&drop.id).unwrap();

        let ids: Vec<String> = store.load_all().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[test]
    fn delete_unknown_id_leaves_storage_unchanged() {
        let storage = MemoryKeyValueStore::new();
        let store = ConfigStore::new(storage.clone());
        store.save("only", &selections()).unwrap();
        let before = storage.raw(SAVED_CONFIGS_KEY);

        store.delete("no-such-id").unwrap();

        assert_eq!(storage.raw(SAVED_CONFIGS_KEY), before);
    }

    #[test]
    fn corrupt_payload_loads_as_empty() {
        let storage = MemoryKeyValueStore::new().with_value(SAVED_CONFIGS_KEY, "{not json");
        let store = ConfigStore::new(storage);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn save_over_corrupt_payload_starts_fresh_list() {
        let storage = MemoryKeyValueStore::new().with_value(SAVED_CONFIGS_KEY, "garbage");
        let store = ConfigStore::new(storage);
        store.save("fresh", &selections()).unwrap();
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn reads_records_written_by_the_browser_app() {
        let raw = r#"[{"id":"abc","name":"Legacy","createdAt":1700000000000,
            "selections":{"taskType":"Artículo","taskTypeOther":"","depth":[],"context":"",
            "examples":"","role":"Experto","roleOther":"","additionalResources":"",
            "additionalResourcesOther":"","citationStyle":"APA","specificExamples":"",
            "audience":"Colegas","audienceOther":"","format":"Tabla"}}]"#;
        let store = ConfigStore::new(MemoryKeyValueStore::new().with_value(SAVED_CONFIGS_KEY, raw));

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].created_at, 1_700_000_000_000);
        assert_eq!(loaded[0].selections.citation_style, "APA");
    }

    #[test]
    fn find_by_id_or_name() {
        let store = ConfigStore::new(MemoryKeyValueStore::new());
        let saved = store.save("Informe", &selections()).unwrap();
        assert_eq!(store.find(&saved.id).map(|c| c.name), Some("Informe".to_string()));
        assert_eq!(store.find("informe").map(|c| c.id), Some(saved.id));
        assert!(store.find("nada").is_none());
    }
}
