//! In-memory task collection synchronized with the storage slot.
//!
//! The collection is an ordered sequence; display order follows insertion
//! order and is never re-sorted. Every mutation rewrites the slot wholesale.

use super::slot::{Slot, SlotError};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::{msg_debug, msg_warning};
use anyhow::Result;

pub struct Tasks {
    slot: Slot,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Opens the collection backed by the default slot.
    pub fn new() -> Result<Tasks> {
        Ok(Self::open(Slot::new()?))
    }

    /// Opens the collection backed by the given slot. A slot that cannot be
    /// read or parsed is logged and degrades to an empty list.
    pub fn open(slot: Slot) -> Tasks {
        let tasks = match slot.read() {
            Ok(tasks) => tasks,
            Err(e) => {
                msg_warning!(Message::SlotReadFailed(e.to_string()));
                Vec::new()
            }
        };
        msg_debug!(format!("Loaded {} task(s) from storage slot", tasks.len()));

        Tasks { slot, tasks }
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the tasks visible under the given filter, in insertion order.
    /// The underlying data is never mutated by filtering.
    pub fn fetch(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Number of tasks not yet completed.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Appends a task and persists the list.
    pub fn insert(&mut self, task: Task) -> Result<(), SlotError> {
        self.tasks.push(task);
        self.save()
    }

    /// Flips a task between active and completed. Returns the updated task,
    /// or `None` if no task has the given id.
    pub fn toggle(&mut self, id: i64) -> Result<Option<Task>, SlotError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.completed = !task.completed;
        let task = task.clone();
        self.save()?;
        Ok(Some(task))
    }

    /// Replaces a task's text. An empty or whitespace-only replacement is a
    /// no-op retaining the original text.
    pub fn update_text(&mut self, id: i64, text: &str) -> Result<Option<Task>, SlotError> {
        let trimmed = text.trim();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if trimmed.is_empty() || trimmed == task.text {
            return Ok(Some(task.clone()));
        }
        task.text = trimmed.to_string();
        let task = task.clone();
        self.save()?;
        Ok(Some(task))
    }

    /// Removes a task from the collection and persists the list. Returns the
    /// number of tasks removed.
    pub fn delete(&mut self, id: i64) -> Result<usize, SlotError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    fn save(&self) -> Result<(), SlotError> {
        self.slot.write(&self.tasks)
    }
}
