use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Todo {
    /// Empty until the store assigns one.
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Stamped by the store on every write.
    pub mod_time: DateTime<Utc>,
}
impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
