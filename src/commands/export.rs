//! Data export command for external analysis and backup.
//!
//! Writes the current task list to a CSV or JSON file. The JSON output uses
//! the storage slot's record layout, so it doubles as a backup.

use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_info, msg_success,
    storage::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a timestamped file name is generated when
    /// omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?;
    let all = tasks.fetch(TaskFilter::All);

    if all.is_empty() {
        msg_info!(Message::NoTasksToExport);
        return Ok(());
    }

    msg_info!(Message::ExportingTasks(args.format.extension().to_string()));

    let path = Exporter::new(args.format, args.output).export_tasks(&all)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
