//! Task list export for backup and external analysis.
//!
//! Two output formats are supported: CSV for spreadsheet tools and JSON for
//! programmatic processing. The JSON output uses the same record layout as
//! the storage slot, so an exported file can serve as a backup of it.

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output`, or to a timestamped file in
    /// the current directory when no path is given.
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| {
            PathBuf::from(format!(
                "tudo_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Exporter { format, output }
    }

    /// Writes the task list and returns the output path.
    pub fn export_tasks(&self, tasks: &[Task]) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.write_csv(tasks)?,
            ExportFormat::Json => self.write_json(tasks)?,
        }
        Ok(self.output.clone())
    }

    fn write_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output)?;

        writer.write_record(["id", "text", "completed", "createdAt"])?;
        for task in tasks {
            writer.write_record([
                task.id.to_string(),
                task.text.clone(),
                task.completed.to_string(),
                task.created_at.to_string(),
            ])?;
        }
        writer.flush()?;

        Ok(())
    }

    fn write_json(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.output)?;
        serde_json::to_writer_pretty(&file, tasks)?;
        Ok(())
    }
}
