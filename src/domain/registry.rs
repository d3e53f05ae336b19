use super::task::Task;
use std::collections::HashSet;
use uuid::Uuid;

/// Parse the leading integer of a form field the way a lenient number input does:
/// leading whitespace, an optional sign, then at least one digit. Anything after
/// the digits is ignored ("12abc" is 12).
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Ordered collection of pending tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry from previously persisted tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append `count` identical tasks built from raw form input.
    ///
    /// The name must be non-empty after trimming and the minutes must parse to a
    /// positive integer. An unparseable or zero count means one task; a negative
    /// count adds nothing. Invalid input leaves the registry untouched.
    /// Returns how many tasks were added.
    pub fn add_tasks(&mut self, name: &str, minutes: &str, count: &str) -> usize {
        let name = name.trim();
        if name.is_empty() {
            return 0;
        }

        let minutes = match parse_leading_int(minutes) {
            Some(m) if m > 0 => m as u64,
            _ => return 0,
        };

        let count = match parse_leading_int(count) {
            None | Some(0) => 1,
            Some(c) => usize::try_from(c).unwrap_or(0),
        };

        let mut taken: HashSet<Uuid> = self.tasks.iter().map(|t| t.id).collect();
        let mut added = 0;
        for _ in 0..count {
            let id = mint_id(&mut taken);
            match Task::new(id, name, minutes) {
                Some(task) => {
                    self.tasks.push(task);
                    added += 1;
                }
                None => break,
            }
        }
        added
    }

    /// Remove the task with this id, if present
    pub fn remove_task(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Pending tasks in insertion order
    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[cfg(test)]
    pub fn contains(&self, id: Uuid) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every pending task. Irreversible; callers confirm first.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
    }
}

/// Draw an id not in `taken` and claim it
fn mint_id(taken: &mut HashSet<Uuid>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if taken.insert(id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("25"), Some(25));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_add_tasks_batch() {
        let mut registry = TaskRegistry::new();
        let added = registry.add_tasks(" Deep work ", "45", "3");

        assert_eq!(added, 3);
        assert_eq!(registry.len(), 3);
        for task in registry.list_tasks() {
            assert_eq!(task.name, "Deep work");
            assert_eq!(task.estimated_minutes, 45);
            assert_eq!(task.estimated_seconds, 45 * 60);
        }
    }

    #[test]
    fn test_add_tasks_ids_unique() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("Inbox", "5", "50");
        registry.add_tasks("Inbox", "5", "50");

        let ids: HashSet<Uuid> = registry.list_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_large_batch_gets_distinct_ids() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("Seed", "1", "10");
        assert_eq!(registry.add_tasks("Inbox", "5", "20000"), 20000);

        let ids: HashSet<Uuid> = registry.list_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 20010);
    }

    #[test]
    fn test_mint_id_skips_taken() {
        let mut taken = HashSet::new();
        let first = mint_id(&mut taken);
        let second = mint_id(&mut taken);

        assert_ne!(first, second);
        assert!(taken.contains(&first) && taken.contains(&second));
    }

    #[test]
    fn test_add_tasks_appends_in_order() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("First", "10", "1");
        registry.add_tasks("Second", "20", "1");

        let names: Vec<&str> = registry.list_tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_add_tasks_count_defaults_to_one() {
        let mut registry = TaskRegistry::new();
        assert_eq!(registry.add_tasks("A", "10", ""), 1);
        assert_eq!(registry.add_tasks("B", "10", "many"), 1);
        assert_eq!(registry.add_tasks("C", "10", "0"), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_tasks_negative_count_adds_nothing() {
        let mut registry = TaskRegistry::new();
        assert_eq!(registry.add_tasks("A", "10", "-2"), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_tasks_invalid_input_is_noop() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("Keep", "5", "1");

        assert_eq!(registry.add_tasks("", "10", "1"), 0);
        assert_eq!(registry.add_tasks("   ", "10", "1"), 0);
        assert_eq!(registry.add_tasks("Name", "0", "1"), 0);
        assert_eq!(registry.add_tasks("Name", "-5", "1"), 0);
        assert_eq!(registry.add_tasks("Name", "soon", "1"), 0);
        assert_eq!(registry.add_tasks("Name", "", "1"), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_task() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("A", "10", "2");
        let id = registry.list_tasks()[0].id;

        let removed = registry.remove_task(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(id));

        // Absent id is a no-op
        assert!(registry.remove_task(id).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut registry = TaskRegistry::new();
        registry.add_tasks("A", "10", "4");
        registry.clear_all();
        assert!(registry.is_empty());
    }
}
