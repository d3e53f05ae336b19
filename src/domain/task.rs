use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A queued unit of work with an estimated duration.
///
/// Tasks are never mutated after creation. The seconds value is derived once
/// from the minutes and stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the registry that minted it
    pub id: Uuid,
    /// Trimmed, non-empty label
    pub name: String,
    /// User-supplied estimate
    pub estimated_minutes: u64,
    /// `estimated_minutes * 60`
    pub estimated_seconds: u64,
}

impl Task {
    /// Build a task from an already validated name and estimate.
    ///
    /// Returns `None` when the estimate is zero or the seconds value would overflow.
    pub fn new(id: Uuid, name: &str, estimated_minutes: u64) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || estimated_minutes == 0 {
            return None;
        }
        let estimated_seconds = estimated_minutes.checked_mul(60)?;

        Some(Self {
            id,
            name: name.to_string(),
            estimated_minutes,
            estimated_seconds,
        })
    }
}
