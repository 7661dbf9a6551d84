//! # Tudo - a simple task list
//!
//! A command-line utility for keeping a short list of text tasks:
//! add, edit, complete, delete and filter them between runs.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, toggle and delete short text tasks
//! - **Display Filters**: Show all, active or completed tasks without touching the data
//! - **Local Persistence**: The whole list lives in a single JSON storage slot
//! - **Data Export**: Export the list to CSV or JSON for backup and analysis
//! - **Configuration**: Interactive setup for display preferences
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
