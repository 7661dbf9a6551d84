use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_print;
use anyhow::Result;
use chrono::{Local, TimeZone};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the visible tasks as a table, in insertion order.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TEXT", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.completed { "x" } else { "" },
                task.text,
                Self::format_created(task.created_at)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the active-count line shown after every render.
    pub fn stats(active_count: usize) {
        msg_print!(Message::ActiveCount(active_count));
    }

    fn format_created(millis: i64) -> String {
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}
