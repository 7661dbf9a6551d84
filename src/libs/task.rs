use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single to-do item record.
///
/// The `id` is assigned from the local clock in milliseconds at creation
/// time. Two tasks created within the same clock tick may collide; this is
/// accepted. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
}

impl Task {
    pub fn new(text: &str) -> Self {
        let now = Local::now().timestamp_millis();
        Task {
            id: now,
            text: text.to_string(),
            completed: false,
            created_at: now,
        }
    }
}

/// A display-only predicate selecting all, incomplete or completed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}
