//! Display implementation for tudo application messages.
//!
//! All user-facing text lives here, in one place, so that wording stays
//! consistent and every message variant has exactly one rendering.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task '{}' added successfully.", text),
            Message::TaskCompleted(text) => format!("Task '{}' marked as completed.", text),
            Message::TaskReactivated(text) => format!("Task '{}' marked as active.", text),
            Message::TaskUpdated(text) => format!("Task '{}' updated successfully.", text),
            Message::TaskDeleted => "Task deleted successfully.".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::EmptyTaskText => "Task text cannot be empty.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::ActiveCount(count) => format!("Active: {}", count),
            Message::EditingTask(text) => format!("Editing task: {}", text),
            Message::ConfirmDeleteTask(text) => format!("Delete task '{}'?", text),

            // === STORAGE MESSAGES ===
            Message::SlotReadFailed(error) => {
                format!("Failed to read the task list, starting with an empty one: {}", error)
            }
            Message::SlotWriteFailed(error) => {
                format!("Failed to save the task list, this change will not survive reload: {}", error)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed.".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingTasks(format) => format!("Exporting tasks in {} format...", format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::NoTasksToExport => "No tasks to export.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultFilter => "Default filter for the task list".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
