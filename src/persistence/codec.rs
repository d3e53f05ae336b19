use super::store::{KeyValueStore, StoreError};
use crate::domain::{Task, TaskRegistry, TimeBank};

/// Key holding the JSON task list
pub const TASKS_KEY: &str = "mindful-tasks";
/// Key holding the banked seconds as decimal text
pub const SAVED_TIME_KEY: &str = "mindful-savedTime";

pub fn encode_tasks(tasks: &[Task]) -> Result<String, StoreError> {
    serde_json::to_string(tasks).map_err(|source| StoreError::Encode {
        key: TASKS_KEY.to_string(),
        source,
    })
}

/// Decode a persisted task list. Malformed data is discarded.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed task list");
            Vec::new()
        }
    }
}

pub fn encode_balance(bank: &TimeBank) -> String {
    bank.saved_seconds().to_string()
}

/// Decode a persisted balance. Anything that is not a non-negative integer is treated as absent.
pub fn decode_balance(raw: &str) -> TimeBank {
    match raw.trim().parse::<u64>() {
        Ok(seconds) => TimeBank::new(seconds),
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "discarding malformed saved time");
            TimeBank::default()
        }
    }
}

/// Seed the registry and the bank from the store, falling back to empty defaults
pub fn load_state(store: &dyn KeyValueStore) -> (TaskRegistry, TimeBank) {
    let tasks = store
        .load(TASKS_KEY)
        .map(|raw| decode_tasks(&raw))
        .unwrap_or_default();
    let bank = store
        .load(SAVED_TIME_KEY)
        .map(|raw| decode_balance(&raw))
        .unwrap_or_default();

    (TaskRegistry::from_tasks(tasks), bank)
}

pub fn save_tasks(store: &mut dyn KeyValueStore, registry: &TaskRegistry) -> Result<(), StoreError> {
    let encoded = encode_tasks(registry.list_tasks())?;
    store.save(TASKS_KEY, &encoded)
}

pub fn save_balance(store: &mut dyn KeyValueStore, bank: &TimeBank) -> Result<(), StoreError> {
    store.save(SAVED_TIME_KEY, &encode_balance(bank))
}

/// Remove both persisted records
pub fn clear_state(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(TASKS_KEY)?;
    store.remove(SAVED_TIME_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_state_empty_store() {
        let store = MemoryStore::new();
        let (registry, bank) = load_state(&store);
        assert!(registry.is_empty());
        assert_eq!(bank.saved_seconds(), 0);
    }

    #[test]
    fn test_save_and_load_state() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("Write", "25", "2");
        registry.add_tasks("Review", "10", "1");
        let bank = TimeBank::new(1234);

        let mut store = MemoryStore::new();
        save_tasks(&mut store, &registry).unwrap();
        save_balance(&mut store, &bank).unwrap();

        let (loaded_registry, loaded_bank) = load_state(&store);
        assert_eq!(loaded_registry, registry);
        assert_eq!(loaded_bank, bank);
        assert_eq!(store.load(SAVED_TIME_KEY).as_deref(), Some("1234"));
    }

    #[test]
    fn test_malformed_tasks_discarded() {
        let store = MemoryStore::new()
            .with_value(TASKS_KEY, "{not json")
            .with_value(SAVED_TIME_KEY, "90");
        let (registry, bank) = load_state(&store);

        assert!(registry.is_empty());
        assert_eq!(bank.saved_seconds(), 90);
    }

    #[test]
    fn test_malformed_balance_treated_as_absent() {
        assert_eq!(decode_balance("abc").saved_seconds(), 0);
        assert_eq!(decode_balance("-20").saved_seconds(), 0);
        assert_eq!(decode_balance("").saved_seconds(), 0);
        assert_eq!(decode_balance(" 300\n").saved_seconds(), 300);
    }

    #[test]
    fn test_decode_tasks_wire_format() {
        let raw = r#"[{"id":"6f9619ff-8b86-d011-b42d-00c04fc964ff","name":"Plan","estimatedMinutes":15,"estimatedSeconds":900}]"#;
        let tasks = decode_tasks(raw);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Plan");
        assert_eq!(tasks[0].estimated_minutes, 15);
        assert_eq!(tasks[0].estimated_seconds, 900);
    }

    #[test]
    fn test_clear_state() {
        let mut store = MemoryStore::new()
            .with_value(TASKS_KEY, "[]")
            .with_value(SAVED_TIME_KEY, "5");
        clear_state(&mut store).unwrap();

        assert_eq!(store.load(TASKS_KEY), None);
        assert_eq!(store.load(SAVED_TIME_KEY), None);
    }
}
